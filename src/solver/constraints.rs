//! Accumulated letter knowledge across rounds
//!
//! A [`ConstraintState`] starts empty and absorbs one guess/feedback pair per
//! round. It only ever grows more specific; there is no undo.

use crate::core::{Feedback, InputError, Pattern, WORD_LENGTH, Word};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

/// Everything learned about the hidden word so far
///
/// Invariant: no letter is in both `absent_letters` and `required_letters`.
/// A letter reported Hit or Present is required, whatever an earlier Miss said.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    /// Position -> letter confirmed at that position
    fixed_positions: FxHashMap<usize, u8>,
    /// Position -> letters confirmed not at that position
    excluded_positions: FxHashMap<usize, FxHashSet<u8>>,
    /// Letters that appear nowhere in the word
    absent_letters: BTreeSet<u8>,
    /// Letters that appear at least once, position possibly unknown
    required_letters: BTreeSet<u8>,
}

impl ConstraintState {
    /// Create an empty state that admits every word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb one round of feedback
    ///
    /// Positive signals (Hit, Present) are recorded before any Miss is looked
    /// at. A Miss on a letter that is hit or present elsewhere is an excess
    /// copy: it constrains positions but never marks the letter absent.
    ///
    /// # Errors
    /// Returns `InputError::Contradiction` if the round disagrees with a fixed
    /// or excluded position from earlier rounds. The state is left untouched.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Pattern, Word};
    /// use wordle_assist::solver::ConstraintState;
    ///
    /// let mut state = ConstraintState::new();
    /// let guess = Word::new("sells").unwrap();
    /// state.apply(&guess, &Pattern::parse("-YG--").unwrap()).unwrap();
    ///
    /// assert!(state.is_required(b'l'));
    /// assert!(!state.is_absent(b'l'));
    /// assert!(state.admits(&Word::new("oiled").unwrap()));
    /// ```
    pub fn apply(&mut self, guess: &Word, pattern: &Pattern) -> Result<(), InputError> {
        self.check_consistent(guess, pattern)?;

        for (i, feedback) in pattern.iter().enumerate() {
            if feedback.is_positive() {
                let letter = guess.char_at(i);
                self.required_letters.insert(letter);
                self.absent_letters.remove(&letter);
            }
        }

        let mut excess = BTreeSet::new();
        for (i, feedback) in pattern.iter().enumerate() {
            let letter = guess.char_at(i);
            match feedback {
                Feedback::Hit => {
                    self.fixed_positions.insert(i, letter);
                }
                Feedback::Present => self.exclude(i, letter),
                Feedback::Miss if self.required_letters.contains(&letter) => {
                    self.exclude(i, letter);
                    excess.insert(letter);
                }
                Feedback::Miss => {
                    self.absent_letters.insert(letter);
                }
            }
        }

        for letter in excess {
            self.reconcile_excess(letter, guess, pattern);
        }

        debug!(
            "applied {guess} {}: fixed={} excluded={} absent={} required={}",
            pattern.to_emoji(),
            self.fixed_positions.len(),
            self.excluded_positions.values().map(FxHashSet::len).sum::<usize>(),
            self.absent_letters.len(),
            self.required_letters.len()
        );

        Ok(())
    }

    /// Parse and absorb a raw guess and feedback string
    ///
    /// Both inputs are trimmed. The guess is lowercased.
    ///
    /// # Errors
    /// Returns `InputError` if the lengths differ, the guess is not five
    /// letters a-z, a feedback symbol is unrecognized, or the round
    /// contradicts earlier ones.
    pub fn apply_str(&mut self, guess: &str, feedback: &str) -> Result<(), InputError> {
        let (guess, feedback) = (guess.trim(), feedback.trim());
        let guess_len = guess.chars().count();
        let feedback_len = feedback.chars().count();
        if guess_len != feedback_len {
            return Err(InputError::LengthMismatch {
                guess: guess_len,
                feedback: feedback_len,
            });
        }

        let word = Word::new(guess)?;
        let pattern = Pattern::parse(feedback)?;
        self.apply(&word, &pattern)
    }

    /// Check whether a word is consistent with everything learned so far
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        if self.absent_letters.iter().any(|&letter| word.has_letter(letter)) {
            return false;
        }

        let excluded_hit = self
            .excluded_positions
            .iter()
            .any(|(&position, letters)| letters.contains(&word.char_at(position)));
        if excluded_hit {
            return false;
        }

        let fixed_missed = self
            .fixed_positions
            .iter()
            .any(|(&position, &letter)| word.char_at(position) != letter);
        if fixed_missed {
            return false;
        }

        self.required_letters
            .iter()
            .all(|&letter| word.has_letter(letter))
    }

    /// The letter fixed at a position, if known
    #[must_use]
    pub fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed_positions.get(&position).copied()
    }

    #[must_use]
    pub const fn fixed_positions(&self) -> &FxHashMap<usize, u8> {
        &self.fixed_positions
    }

    /// Letters ruled out at a position, in alphabetical order
    #[must_use]
    pub fn excluded_at(&self, position: usize) -> Vec<u8> {
        let mut letters: Vec<u8> = self
            .excluded_positions
            .get(&position)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn is_excluded_at(&self, position: usize, letter: u8) -> bool {
        self.excluded_positions
            .get(&position)
            .is_some_and(|letters| letters.contains(&letter))
    }

    #[must_use]
    pub const fn absent_letters(&self) -> &BTreeSet<u8> {
        &self.absent_letters
    }

    #[must_use]
    pub const fn required_letters(&self) -> &BTreeSet<u8> {
        &self.required_letters
    }

    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.absent_letters.contains(&letter)
    }

    #[must_use]
    pub fn is_required(&self, letter: u8) -> bool {
        self.required_letters.contains(&letter)
    }

    /// True until the first round has been applied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed_positions.is_empty()
            && self.excluded_positions.is_empty()
            && self.absent_letters.is_empty()
            && self.required_letters.is_empty()
    }

    fn exclude(&mut self, position: usize, letter: u8) {
        self.excluded_positions
            .entry(position)
            .or_default()
            .insert(letter);
    }

    /// Reject a round that cannot be true given earlier rounds
    fn check_consistent(&self, guess: &Word, pattern: &Pattern) -> Result<(), InputError> {
        for (position, feedback) in pattern.iter().enumerate() {
            let letter = guess.char_at(position);
            let fixed = self.fixed_at(position);

            let contradicts = match feedback {
                Feedback::Hit => {
                    fixed.is_some_and(|known| known != letter)
                        || self.is_excluded_at(position, letter)
                }
                Feedback::Present | Feedback::Miss => fixed == Some(letter),
            };

            if contradicts {
                return Err(InputError::Contradiction {
                    position,
                    letter: char::from(letter),
                });
            }
        }
        Ok(())
    }

    /// Tighten positions for a letter that also drew a Miss this round
    ///
    /// When every non-missed copy of the letter was a Hit, the Hit count is the
    /// exact number of copies, so the letter can be ruled out everywhere else.
    /// A Present copy leaves its real position unknown, so only the Miss and
    /// Present slots (already excluded) are safe to rule out.
    fn reconcile_excess(&mut self, letter: u8, guess: &Word, pattern: &Pattern) {
        let mut hits = 0;
        let mut present = false;
        for (position, feedback) in pattern.iter().enumerate() {
            if guess.char_at(position) != letter {
                continue;
            }
            match feedback {
                Feedback::Hit => hits += 1,
                Feedback::Present => present = true,
                Feedback::Miss => {}
            }
        }

        if hits == 0 || present {
            return;
        }

        for position in 0..WORD_LENGTH {
            let hit_here =
                guess.char_at(position) == letter && pattern.at(position) == Feedback::Hit;
            if !hit_here && self.fixed_at(position) != Some(letter) {
                self.exclude(position, letter);
            }
        }
    }
}
