//! Word list loading utilities
//!
//! Provides functions to load word lists and frequency tables from files.

use crate::core::Word;
use crate::solver::FrequencyTable;
use anyhow::{Context, Result};
use log::info;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank and invalid lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words/wordle-answers-alphabetical.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Load the full word universe: guess-only words first, then answers
///
/// Order is kept as read, and duplicates are not removed.
///
/// # Errors
///
/// Returns an error naming the file that could not be read.
pub fn load_universe<P: AsRef<Path>, Q: AsRef<Path>>(guesses: P, answers: Q) -> Result<Vec<Word>> {
    let (guesses, answers) = (guesses.as_ref(), answers.as_ref());

    let mut universe = load_from_file(guesses)
        .with_context(|| format!("failed to read guess list {}", guesses.display()))?;
    let guess_count = universe.len();

    let answer_words = load_from_file(answers)
        .with_context(|| format!("failed to read answer list {}", answers.display()))?;
    universe.extend(answer_words);

    info!(
        "loaded {} words ({guess_count} guesses, {} answers)",
        universe.len(),
        universe.len() - guess_count
    );
    Ok(universe)
}

/// Load a `word,count` frequency table from a CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or the CSV is malformed.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> Result<FrequencyTable> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open frequency table {}", path.display()))?;

    let table = FrequencyTable::from_csv_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse frequency table {}", path.display()))?;

    info!("loaded {} word frequencies", table.len());
    Ok(table)
}

/// Convert string slices to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Scorer;
    use std::io::Write;
    use std::path::PathBuf;

    /// Write `content` to a uniquely named file in the temp dir
    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_assist_{}_{name}",
            std::process::id()
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_lines_skips_blanks_and_normalizes() {
        let words = words_from_lines("CRANE\n\n  slate  \nab\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn load_universe_puts_guesses_first() {
        let guesses = temp_file("guesses.txt", "aahed\naalii\n");
        let answers = temp_file("answers.txt", "aback\nabase\n");

        let universe = load_universe(&guesses, &answers).unwrap();
        let texts: Vec<&str> = universe.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["aahed", "aalii", "aback", "abase"]);

        let _ = fs::remove_file(guesses);
        let _ = fs::remove_file(answers);
    }

    #[test]
    fn load_universe_names_missing_file() {
        let answers = temp_file("answers_only.txt", "aback\n");
        let err = load_universe("/nonexistent/guesses.txt", &answers).unwrap_err();
        assert!(err.to_string().contains("guess list"));

        let _ = fs::remove_file(answers);
    }

    #[test]
    fn load_frequencies_reads_csv() {
        let path = temp_file("freq.csv", "word,count\nabout,1226734006\nthe,1\n");

        let table = load_frequencies(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.score(&Word::new("about").unwrap()) > 0.0);

        let _ = fs::remove_file(path);
    }
}
