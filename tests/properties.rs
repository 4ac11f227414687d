//! Property tests for feedback tracking and pruning
//!
//! Words are drawn from a five-letter alphabet so repeated letters are common.

use proptest::prelude::*;
use wordle_assist::core::{Pattern, Word};
use wordle_assist::solver::{ConstraintState, prune, prune_candidates};

fn word() -> impl Strategy<Value = Word> {
    "[a-e]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn universe() -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec(word(), 1..80)
}

/// Apply the feedback each guess would really get against `answer`
fn play(answer: &Word, guesses: &[Word]) -> Vec<ConstraintState> {
    let mut state = ConstraintState::new();
    let mut states = vec![state.clone()];
    for guess in guesses {
        state
            .apply(guess, &Pattern::calculate(guess, answer))
            .unwrap();
        states.push(state.clone());
    }
    states
}

proptest! {
    #[test]
    fn true_feedback_never_rules_out_the_answer(
        answer in word(),
        guesses in prop::collection::vec(word(), 1..6),
    ) {
        for state in play(&answer, &guesses) {
            prop_assert!(state.admits(&answer));
        }
    }

    #[test]
    fn answer_survives_pruning(
        mut words in universe(),
        answer in word(),
        guesses in prop::collection::vec(word(), 1..6),
    ) {
        words.push(answer.clone());
        let states = play(&answer, &guesses);
        let last = states.last().unwrap();

        prop_assert!(prune(&words, last).contains(&&answer));
    }

    #[test]
    fn applying_a_round_twice_changes_nothing(
        answer in word(),
        earlier in prop::collection::vec(word(), 0..3),
        guess in word(),
    ) {
        let mut state = play(&answer, &earlier).pop().unwrap();
        let pattern = Pattern::calculate(&guess, &answer);

        state.apply(&guess, &pattern).unwrap();
        let once = state.clone();
        state.apply(&guess, &pattern).unwrap();

        prop_assert_eq!(once, state);
    }

    #[test]
    fn pruning_is_an_order_preserving_subsequence(
        words in universe(),
        answer in word(),
        guess in word(),
    ) {
        let mut state = ConstraintState::new();
        state.apply(&guess, &Pattern::calculate(&guess, &answer)).unwrap();

        let kept = prune(&words, &state);
        let mut rest = words.iter();
        for word in &kept {
            prop_assert!(state.admits(word));
            prop_assert!(rest.any(|w| std::ptr::eq(w, *word)));
        }
        let kept_count = words.iter().filter(|w| state.admits(w)).count();
        prop_assert_eq!(kept.len(), kept_count);
    }

    #[test]
    fn later_rounds_only_narrow(
        words in universe(),
        answer in word(),
        guesses in prop::collection::vec(word(), 1..5),
    ) {
        let states = play(&answer, &guesses);
        let mut candidates = prune(&words, &states[0]);
        prop_assert_eq!(candidates.len(), words.len());

        for state in &states[1..] {
            let narrowed = prune_candidates(&candidates, state);
            prop_assert!(narrowed.len() <= candidates.len());
            prop_assert_eq!(&narrowed, &prune(&words, state));
            candidates = narrowed;
        }
    }
}
