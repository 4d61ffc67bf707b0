//! # Strategies
//!
//! Interchangeable decision rules for the simplex method.
pub mod pivot_rule;
