#![allow(dead_code)]

pub mod fmt;
#[cfg(test)]
pub mod hash;
pub mod panic;
pub mod result;
