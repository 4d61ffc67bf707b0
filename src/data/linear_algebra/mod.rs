//! # Linear algebra
//!
//! Containers for the rows and columns the tableau is made of.
pub mod vector;
