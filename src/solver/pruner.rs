//! Candidate pruning
//!
//! Filters a word list down to the words consistent with a [`ConstraintState`].
//! Pruning never reorders: the survivors keep their relative input order, so
//! score ties resolve the same way every time.

use super::ConstraintState;
use crate::core::Word;
use log::debug;
use rayon::prelude::*;

/// Lists at least this long are filtered in parallel
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Keep the words of `words` that `state` admits, in input order
///
/// Pruning is idempotent and can only shrink the list. An empty result is a
/// normal value: it means the feedback so far rules out every word.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::{ConstraintState, prune};
/// use wordle_assist::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "trace", "least", "adieu"]);
/// let mut state = ConstraintState::new();
/// state.apply_str("crane", "G-G-G").unwrap();
///
/// assert!(prune(&words, &state).is_empty());
/// ```
#[must_use]
pub fn prune<'a>(words: &'a [Word], state: &ConstraintState) -> Vec<&'a Word> {
    let kept: Vec<&Word> = if words.len() >= PARALLEL_THRESHOLD {
        words.par_iter().filter(|word| state.admits(word)).collect()
    } else {
        words.iter().filter(|word| state.admits(word)).collect()
    };

    debug!("pruned {} -> {} words", words.len(), kept.len());
    kept
}

/// Same as [`prune`], for a list that is itself the result of earlier pruning
#[must_use]
pub fn prune_candidates<'a>(candidates: &[&'a Word], state: &ConstraintState) -> Vec<&'a Word> {
    let kept: Vec<&Word> = if candidates.len() >= PARALLEL_THRESHOLD {
        candidates
            .par_iter()
            .copied()
            .filter(|word| state.admits(word))
            .collect()
    } else {
        candidates
            .iter()
            .copied()
            .filter(|word| state.admits(word))
            .collect()
    };

    debug!("pruned {} -> {} candidates", candidates.len(), kept.len());
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn empty_state_keeps_everything_in_order() {
        let words = words_from_slice(&["slate", "crane", "audio"]);
        let kept = prune(&words, &ConstraintState::new());
        assert_eq!(texts(&kept), vec!["slate", "crane", "audio"]);
    }

    #[test]
    fn crane_scenario_leaves_no_candidates() {
        let words = words_from_slice(&["crane", "trace", "least", "adieu"]);
        let mut state = ConstraintState::new();
        state.apply_str("crane", "G-G-G").unwrap();

        assert!(prune(&words, &state).is_empty());
    }

    #[test]
    fn crane_scenario_keeps_matching_words() {
        let words = words_from_slice(&["crane", "chase", "cease", "crave", "clade"]);
        let mut state = ConstraintState::new();
        state.apply_str("crane", "G-G-G").unwrap();

        // CRANE and CRAVE both contain R
        assert_eq!(texts(&prune(&words, &state)), vec!["chase", "cease", "clade"]);
    }

    #[test]
    fn absent_letters_remove_words() {
        let words = words_from_slice(&["radio", "glyph", "trunk", "nymph", "crypt"]);
        let mut state = ConstraintState::new();
        state.apply_str("audio", "-----").unwrap();

        assert_eq!(
            texts(&prune(&words, &state)),
            vec!["glyph", "nymph", "crypt"]
        );
    }

    #[test]
    fn required_letters_must_appear() {
        let words = words_from_slice(&["shirt", "brisk", "stomp", "worst"]);
        let mut state = ConstraintState::new();
        state.apply_str("crane", "-Y---").unwrap();

        // R somewhere, but not at position 1
        assert_eq!(texts(&prune(&words, &state)), vec!["shirt", "worst"]);
    }

    #[test]
    fn duplicate_letter_round_admits_single_copy() {
        let words = words_from_slice(&["oiled", "oille", "level", "idled", "ileal"]);
        let mut state = ConstraintState::new();
        state.apply_str("sells", "-YG--").unwrap();

        assert_eq!(texts(&prune(&words, &state)), vec!["oiled", "idled"]);
    }

    #[test]
    fn pruning_twice_is_idempotent() {
        let words = words_from_slice(&["chase", "cease", "clade", "crane", "glyph"]);
        let mut state = ConstraintState::new();
        state.apply_str("crane", "G-G-G").unwrap();

        let once = prune(&words, &state);
        let twice = prune_candidates(&once, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn parallel_path_matches_sequential() {
        // Build a list big enough to cross the parallel threshold
        let letters = b"abcdefghij";
        let mut texts_in = Vec::new();
        for &a in letters {
            for &b in letters {
                for &c in letters {
                    for &d in &letters[..5] {
                        let bytes = [a, b, c, d, b'e'];
                        texts_in.push(String::from_utf8(bytes.to_vec()).unwrap());
                    }
                }
            }
        }
        let refs: Vec<&str> = texts_in.iter().map(String::as_str).collect();
        let words = words_from_slice(&refs);
        assert!(words.len() >= PARALLEL_THRESHOLD);

        let mut state = ConstraintState::new();
        state.apply_str("bacon", "Y-G--").unwrap();

        let parallel = prune(&words, &state);
        let sequential: Vec<&Word> = words.iter().filter(|w| state.admits(w)).collect();
        assert_eq!(parallel, sequential);

        let refs_all: Vec<&Word> = words.iter().collect();
        assert_eq!(prune_candidates(&refs_all, &state), sequential);
    }
}
