//! Simple interactive CLI mode
//!
//! Text-based loop: the user reports each guess and the colours the game
//! showed, and the assistant narrows the candidates and suggests the next word.

use crate::core::{Pattern, Word};
use crate::output::{print_no_candidates, print_round, print_solved};
use crate::solver::{RoundOutcome, Scorer, Session};
use anyhow::{Result, bail};
use log::info;
use std::io::{self, BufRead, Write};

/// Words typed at a prompt that are not guesses or feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Win,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::New),
            "win" | "correct" | "solved" => Some(Self::Win),
            _ => None,
        }
    }
}

/// Run the simple interactive CLI mode, reading lines from `input`
///
/// Ends cleanly on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if the universe is empty or reading input fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: BufRead, S: Scorer + ?Sized>(
    universe: &[Word],
    scorer: &S,
    top: usize,
    mut input: R,
) -> Result<()> {
    if universe.is_empty() {
        bail!("word list is empty");
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Assistant - Simple Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess you played (or press Enter to take the suggestion),");
    println!("then the feedback the game gave you:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜/⬛ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let mut session = Session::new(universe, scorer);

    loop {
        let Some(suggestion) = session.recommendation() else {
            print_no_candidates();
            session = Session::new(universe, scorer);
            continue;
        };

        if session.rounds() == 0 {
            println!(
                "📊 {} words possible. Suggested opening: {}\n",
                session.candidates().len(),
                suggestion.text().to_uppercase()
            );
        }

        let Some(line) = prompt(&mut input, "Guess")? else {
            return Ok(());
        };
        let guess = match Command::parse(&line) {
            Some(Command::Quit) => return farewell(),
            Some(Command::New) => {
                session = Session::new(universe, scorer);
                println!("\n🔄 New game started!\n");
                continue;
            }
            Some(Command::Win) => {
                println!("❌ Enter the word you guessed first.\n");
                continue;
            }
            None if line.is_empty() => suggestion.clone(),
            None => match Word::new(line.as_str()) {
                Ok(word) => word,
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            },
        };

        let pattern = loop {
            let Some(line) = prompt(&mut input, "Feedback (G/Y/-)")? else {
                return Ok(());
            };
            match Command::parse(&line) {
                Some(Command::Quit) => return farewell(),
                Some(Command::New) => break None,
                Some(Command::Win) => break Some(Pattern::PERFECT),
                None => match Pattern::parse(&line) {
                    Ok(pattern) => break Some(pattern),
                    Err(e) => println!("❌ {e}. Use G/Y/- or '🟩🟨⬜🟩🟨'\n"),
                },
            }
        };

        let Some(pattern) = pattern else {
            session = Session::new(universe, scorer);
            println!("\n🔄 New game started!\n");
            continue;
        };

        match session.submit(&guess, pattern) {
            Err(e) => println!("❌ {e}\n"),
            Ok(RoundOutcome::Continue { recommendation, .. }) => print_round(
                session.state(),
                session.candidates(),
                recommendation,
                top,
            ),
            Ok(RoundOutcome::Solved(word)) => {
                let guesses = guesses_to_solve(pattern, session.rounds());
                info!("solved {word} in {guesses} guesses");
                print_solved(&word, guesses);
                session = Session::new(universe, scorer);
                println!("\n🔄 New game started!\n");
            }
            Ok(RoundOutcome::NoCandidates) => {
                info!("no candidates left after {} rounds", session.rounds());
                print_no_candidates();
                session = Session::new(universe, scorer);
                println!("\n🔄 New game started!\n");
            }
        }
    }
}

/// Guesses the game takes: a word deduced without being played still costs one more
fn guesses_to_solve(last: Pattern, rounds: usize) -> usize {
    if last.is_perfect() {
        rounds
    } else {
        rounds + 1
    }
}

fn farewell() -> Result<()> {
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
