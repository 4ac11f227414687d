//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_constraints, print_no_candidates, print_round, print_solve_result, print_solved,
};
