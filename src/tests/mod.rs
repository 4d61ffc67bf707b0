//! # Fixture problems
//!
//! Problem instances with small integer data and independently computed optima, shared between
//! the unit tests of the different modules.
