//! Word solving command
//!
//! Plays a known target word against the engine and records each step.

use crate::core::{InputError, Pattern, Word};
use crate::solver::{Scorer, Session};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word, always guessing the engine's recommendation
///
/// Stops on a perfect pattern, when no candidates remain, or after
/// `max_guesses` rounds. A target missing from the universe ends unsolved.
///
/// # Errors
///
/// Returns an error if the target is not a valid 5-letter word.
pub fn solve_word<S: Scorer + ?Sized>(
    config: SolveConfig,
    universe: &[Word],
    scorer: &S,
) -> Result<SolveResult, InputError> {
    let target = Word::new(config.target.as_str())?;
    let mut session = Session::new(universe, scorer);
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let Some(guess) = session.recommendation() else {
            break;
        };

        let candidates_before = session.candidates().len();
        let pattern = Pattern::calculate(guess, &target);
        session.submit(guess, pattern)?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after: session.candidates().len(),
        });

        if pattern.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}
