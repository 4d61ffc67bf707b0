//! # Data structures
//!
//! Value types and containers that the algorithms are defined over.
pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
