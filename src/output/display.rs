//! Display functions for command results

use super::formatters::{attempts_bar, spaced_uppercase};
use colored::Colorize;

/// Print the final-score banner at the end of a session
pub fn print_final_score(score: u32, attempt_count: usize, max_words: usize, score_increase: u32) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CONGRATULATIONS!".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Words played:  {}  [{}]",
        attempt_count,
        attempts_bar(attempt_count, max_words, 20).green()
    );
    println!(
        "   Final score:   {}",
        score.to_string().bright_yellow().bold()
    );

    if score_increase > 0 {
        let guessed = score / score_increase;
        println!(
            "   Guessed:       {} of {} words",
            guessed.to_string().green(),
            max_words
        );
    }
    println!();
}

/// Print the result of the `scramble` utility command
pub fn print_scramble_result(word: &str, variants: &[String]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scrambling: {}",
        word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, variant) in variants.iter().enumerate() {
        println!("  {}. {}", i + 1, spaced_uppercase(variant));
    }
    println!();
}
