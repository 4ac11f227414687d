//! One solving session
//!
//! Ties a [`ConstraintState`] to a shrinking candidate list and a scorer.
//! Each submitted round narrows the candidates left by the previous round.

use super::{ConstraintState, Scorer, prune_candidates, recommend};
use crate::core::{InputError, Pattern, Word};
use log::info;

/// What a round left us with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome<'a> {
    /// Several candidates remain; `recommendation` is the best scoring one
    Continue {
        remaining: usize,
        recommendation: &'a Word,
    },
    /// The word is known
    Solved(Word),
    /// No word in the universe fits the feedback
    NoCandidates,
}

/// State for a single puzzle: the knowledge gathered and the words still possible
pub struct Session<'a, S: Scorer + ?Sized> {
    scorer: &'a S,
    state: ConstraintState,
    candidates: Vec<&'a Word>,
    history: Vec<(Word, Pattern)>,
}

impl<'a, S: Scorer + ?Sized> Session<'a, S> {
    /// Start a session over the whole universe
    pub fn new(universe: &'a [Word], scorer: &'a S) -> Self {
        Self {
            scorer,
            state: ConstraintState::new(),
            candidates: universe.iter().collect(),
            history: Vec::new(),
        }
    }

    /// Apply one guess and its feedback, then prune the remaining candidates
    ///
    /// # Errors
    /// Returns `InputError::Contradiction` if the feedback conflicts with
    /// earlier rounds. The session is unchanged in that case.
    pub fn submit(
        &mut self,
        guess: &Word,
        pattern: Pattern,
    ) -> Result<RoundOutcome<'a>, InputError> {
        self.state.apply(guess, &pattern)?;
        self.history.push((guess.clone(), pattern));

        let before = self.candidates.len();
        self.candidates = prune_candidates(&self.candidates, &self.state);
        info!(
            "round {}: {guess} {} left {} of {before} candidates",
            self.history.len(),
            pattern.to_emoji(),
            self.candidates.len()
        );

        if pattern.is_perfect() {
            return Ok(RoundOutcome::Solved(guess.clone()));
        }

        Ok(self.outcome())
    }

    /// Best guess among the current candidates
    #[must_use]
    pub fn recommendation(&self) -> Option<&'a Word> {
        recommend(&self.candidates, self.scorer)
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// Number of rounds submitted so far
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    fn outcome(&self) -> RoundOutcome<'a> {
        match self.candidates.as_slice() {
            [] => RoundOutcome::NoCandidates,
            [only] => RoundOutcome::Solved((*only).clone()),
            _ => self
                .recommendation()
                .map_or(RoundOutcome::NoCandidates, |recommendation| {
                    RoundOutcome::Continue {
                        remaining: self.candidates.len(),
                        recommendation,
                    }
                }),
        }
    }
}
