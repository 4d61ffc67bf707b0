//! # An exact linear program solver
//!
//! Linear programs in standard form are solved using the tableau variant of the Simplex Method.
//! Every coefficient is held as an exact rational number, such that pivot selection and the final
//! optimum never suffer round-off error.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
