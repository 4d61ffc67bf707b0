//! # Algorithms
//!
//! Algorithms to solve linear programs, together with their supporting logic.
pub mod simplex;
