#![allow(dead_code)]

pub mod data_gen;
pub mod reference;
