//! Formatting utilities for terminal output

use crate::core::WORD_LENGTH;
use crate::solver::ConstraintState;
use std::collections::BTreeSet;

/// Known letters by position, e.g. "c _ a _ e"
#[must_use]
pub fn format_fixed(state: &ConstraintState) -> String {
    (0..WORD_LENGTH)
        .map(|position| state.fixed_at(position).map_or('_', char::from).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A letter set as "a d i", or "-" when empty
#[must_use]
pub fn format_letters(letters: &BTreeSet<u8>) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(|&letter| char::from(letter).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ruled-out letters per 1-based position, e.g. "2:e 4:ls"
#[must_use]
pub fn format_excluded(state: &ConstraintState) -> String {
    let parts: Vec<String> = (0..WORD_LENGTH)
        .filter_map(|position| {
            let letters = state.excluded_at(position);
            if letters.is_empty() {
                None
            } else {
                let letters: String = letters.into_iter().map(char::from).collect();
                Some(format!("{}:{letters}", position + 1))
            }
        })
        .collect();

    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
