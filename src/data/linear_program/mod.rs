//! # Linear programs
//!
//! Describing problems before they are handed to the algorithm.
pub mod elements;
pub mod standard_form;
