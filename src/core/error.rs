//! Input validation errors
//!
//! Every way a guess or feedback string can be rejected before it touches
//! the constraint state.

use std::fmt;

/// Error type for malformed guesses, feedback strings and contradictory rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Guess or feedback did not have exactly five positions
    InvalidLength(usize),
    /// Guess contained something other than an ASCII letter
    InvalidCharacter(char),
    /// Guess and feedback have different lengths
    LengthMismatch { guess: usize, feedback: usize },
    /// Feedback contained a symbol that is not Hit, Present or Miss
    UnknownSymbol(char),
    /// Feedback disagrees with what earlier rounds established at this position
    Contradiction { position: usize, letter: char },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Expected exactly 5 letters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Invalid character '{ch}': only letters a-z are allowed")
            }
            Self::LengthMismatch { guess, feedback } => write!(
                f,
                "Guess has {guess} letters but feedback has {feedback} symbols"
            ),
            Self::UnknownSymbol(ch) => write!(
                f,
                "Unknown feedback symbol '{ch}': use G for hit, Y or / for present, - or # for miss"
            ),
            Self::Contradiction { position, letter } => write!(
                f,
                "Feedback for '{letter}' at position {} contradicts earlier rounds",
                position + 1
            ),
        }
    }
}

impl std::error::Error for InputError {}
