#![deny(missing_docs)]
//! This crate solves the N-Queens placement problem with a depth-first
//! backtracking search, returning the first full non-attacking arrangement
//! it reaches.

/// The `queens` module implements the placement engine, the conflict check,
/// and the solution type, along with the pluggable column-ordering policies
/// of the search.
pub mod queens;
