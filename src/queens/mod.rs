#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod board;
pub mod ordering;
pub mod safety;
pub mod solution;
pub mod solver;
