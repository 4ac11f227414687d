//! Display functions for command results

use super::formatters::{create_progress_bar, format_excluded, format_fixed, format_letters};
use crate::commands::SolveResult;
use crate::core::Word;
use crate::solver::ConstraintState;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            let bar = create_progress_bar(
                step.candidates_after as f64,
                step.candidates_before as f64,
                30,
            );
            println!("  Remaining:  [{}]", bar.green());
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print what is known about the hidden word
pub fn print_constraints(state: &ConstraintState) {
    println!("   Known:      {}", format_fixed(state).bright_green().bold());
    println!("   Not here:   {}", format_excluded(state).yellow());
    println!(
        "   Required:   {}",
        format_letters(state.required_letters()).bright_white()
    );
    println!(
        "   Absent:     {}",
        format_letters(state.absent_letters()).bright_black()
    );
}

/// Print the state of play after a round
pub fn print_round(
    state: &ConstraintState,
    candidates: &[&Word],
    recommendation: &Word,
    top: usize,
) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} candidates remaining",
        candidates.len().to_string().bright_cyan().bold()
    );
    print_constraints(state);

    if top > 0 {
        let shown: Vec<String> = candidates
            .iter()
            .take(top)
            .map(|word| word.text().to_uppercase())
            .collect();
        let more = candidates.len().saturating_sub(top);
        if more > 0 {
            println!("   Candidates: {} (+{more} more)", shown.join(" "));
        } else {
            println!("   Candidates: {}", shown.join(" "));
        }
    }

    println!(
        "\n📊 Recommended guess: {}",
        recommendation.text().to_uppercase().bright_yellow().bold()
    );
}

/// Print the celebration for a solved puzzle
pub fn print_solved(word: &Word, rounds: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "  🎉 Solution: {} ({} {})",
        word.text().to_uppercase().bright_green().bold(),
        rounds,
        if rounds == 1 { "guess" } else { "guesses" }
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the dead-end message when feedback rules out every word
pub fn print_no_candidates() {
    println!(
        "\n{}",
        "❌ No candidates remain! Your feedback may be incorrect."
            .red()
            .bold()
    );
}
