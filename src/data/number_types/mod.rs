//! # Number types
//!
//! The simplex iteration is driven entirely by comparisons between fractions. Doing those
//! comparisons in floating point risks selecting the wrong pivot; this module provides the exact
//! alternative everything else is defined over.
pub mod rational;
