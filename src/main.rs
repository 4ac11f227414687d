//! Wordle Assistant - CLI
//!
//! Interactive helper that narrows the word list from the feedback you enter.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::io;
use std::path::PathBuf;
use wordle_assist::{
    commands::{SolveConfig, run_simple, solve_word},
    core::Word,
    output::print_solve_result,
    solver::FrequencyTable,
    wordlists::{
        DEFAULT_ANSWERS_PATH, DEFAULT_FREQUENCIES_PATH, DEFAULT_GUESSES_PATH,
        loader::{load_frequencies, load_universe},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant that prunes candidates from your feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess-only word list, one word per line
    #[arg(long, global = true, default_value = DEFAULT_GUESSES_PATH)]
    guesses: PathBuf,

    /// Answer word list, one word per line
    #[arg(long, global = true, default_value = DEFAULT_ANSWERS_PATH)]
    answers: PathBuf,

    /// Word frequency table as `word,count` CSV
    #[arg(long, global = true, default_value = DEFAULT_FREQUENCIES_PATH)]
    frequencies: PathBuf,

    /// Number of remaining candidates to list each round
    #[arg(short, long, global = true, default_value = "5")]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple CLI mode (default)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let universe = load_universe(&cli.guesses, &cli.answers)?;
    let frequencies = load_frequencies(&cli.frequencies)?;

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple(&universe, &frequencies, cli.top, io::stdin().lock()),
        Commands::Solve { word, verbose } => {
            solve_command(&word, verbose, &universe, &frequencies)
        }
    }
}

fn solve_command(
    word: &str,
    verbose: bool,
    universe: &[Word],
    frequencies: &FrequencyTable,
) -> Result<()> {
    let config = SolveConfig::new(word.to_string());
    let result = solve_word(config, universe, frequencies)?;

    print_solve_result(&result, verbose);
    Ok(())
}
