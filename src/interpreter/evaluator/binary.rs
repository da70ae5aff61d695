/// Exponentiation.
pub mod power;

pub mod core;
