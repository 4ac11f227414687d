//! Word lists and frequency tables
//!
//! Reads the guess list, the answer list and the corpus frequency table from
//! disk. The engine only ever sees the resulting `Vec<Word>` and `Scorer`.

pub mod loader;

/// Default location of the guess-only word list
pub const DEFAULT_GUESSES_PATH: &str = "words/wordle-allowed-guesses.txt";

/// Default location of the answer word list
pub const DEFAULT_ANSWERS_PATH: &str = "words/wordle-answers-alphabetical.txt";

/// Default location of the `word,count` frequency table
pub const DEFAULT_FREQUENCIES_PATH: &str = "words/unigram_freq.csv";
