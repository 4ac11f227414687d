//! Command implementations

pub mod simple;
pub mod solve;

pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
