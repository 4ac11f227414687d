//! Core domain types for Wordle
//!
//! Words, feedback patterns and input errors. Everything here is pure and
//! has no dependencies beyond std.

mod error;
mod pattern;
mod word;

pub use error::InputError;
pub use pattern::{Feedback, Pattern};
pub use word::{WORD_LENGTH, Word};
