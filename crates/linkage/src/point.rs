//! A labelled point in the plane.

use serde::{Deserialize, Serialize};

/// The smallest allowed value for either coordinate.
pub const COORDINATE_MIN: f32 = 0.0;

/// The largest allowed value for either coordinate.
pub const COORDINATE_MAX: f32 = 1000.0;

/// A labelled point in the plane.
///
/// Points are immutable once created. The id is expected to be unique among
/// all points of a run; the loader enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// The label of the point.
    id: i64,
    /// The x coordinate.
    x: f32,
    /// The y coordinate.
    y: f32,
}

impl Point {
    /// Creates a new `Point`.
    #[must_use]
    pub const fn new(id: i64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    /// The label of the point.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The coordinates as a slice-able array, for the distance functions.
    #[must_use]
    pub const fn coordinates(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Whether both coordinates lie in `[COORDINATE_MIN, COORDINATE_MAX]`.
    ///
    /// `NaN` and infinite coordinates are never in bounds.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        let range = COORDINATE_MIN..=COORDINATE_MAX;
        range.contains(&self.x) && range.contains(&self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{},{}]", self.id, format_g(self.x), format_g(self.y))
    }
}

/// The number of significant digits kept by `format_g`.
const SIGNIFICANT_DIGITS: i32 = 6;

/// Formats `value` the way C's `%g` does: six significant digits, trailing
/// zeros dropped, and scientific notation when the decimal exponent is below
/// -4 or at least six.
fn format_g(value: f32) -> String {
    let value = f64::from(value);
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // The exponent after rounding to the kept digits, e.g. 999999.5 -> 1e6.
    let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1).unsigned_abs() as usize, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent = exponent.parse::<i32>().unwrap_or_default();

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).unsigned_abs() as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

/// Drops trailing zeros after a decimal point, and the point itself if bare.
fn trim_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
