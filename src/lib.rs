//! Wordle Assistant
//!
//! Tracks what Wordle feedback has revealed about the hidden word, prunes the
//! word list down to the words still possible, and suggests the most common one.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Pattern, Word};
//! use wordle_assist::solver::{ConstraintState, prune};
//! use wordle_assist::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["crane", "chase", "cease", "glyph"]);
//!
//! let mut state = ConstraintState::new();
//! let guess = Word::new("crane").unwrap();
//! state.apply(&guess, &Pattern::parse("G-G-G").unwrap()).unwrap();
//!
//! let remaining: Vec<&str> = prune(&words, &state).into_iter().map(Word::text).collect();
//! assert_eq!(remaining, vec!["chase", "cease"]);
//! ```

// Core domain types
pub mod core;

// Constraint tracking, pruning and scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
