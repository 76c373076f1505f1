//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{GameSession, GuessOutcome};
use crate::output::formatters::{spaced_uppercase, word_progress};
use crate::output::print_final_score;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut GameSession<'_, R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Unscramble - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Unscramble the letters to find the hidden word.");
    println!("Commands: 'skip' to skip the word, 'quit' to exit\n");

    loop {
        if session.is_finished() {
            let config = *session.config();
            print_final_score(
                session.score(),
                session.attempt_count(),
                config.max_words,
                config.score_increase,
            );

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.restart();
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "{}   |   Score: {}",
            word_progress(session.word_number(), session.config().max_words),
            session.score().to_string().bright_yellow()
        );
        println!("────────────────────────────────────────────────────────────");
        println!(
            "\n   {}\n",
            spaced_uppercase(session.scrambled_word())
                .bright_cyan()
                .bold()
        );

        let input = get_user_input("Your guess")?;

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "skip" | "s" => {
                if let Some(skipped) = session.skip() {
                    println!(
                        "\n⏭️  Skipped! The word was {}\n",
                        skipped.text().to_uppercase().bright_white().bold()
                    );
                }
            }
            guess => match session.submit_guess(guess) {
                GuessOutcome::Correct => {
                    println!(
                        "\n{} +{} points\n",
                        "✅ Correct!".green().bold(),
                        session.config().score_increase
                    );
                }
                GuessOutcome::Incorrect => {
                    println!("\n{}\n", "❌ Try again!".red().bold());
                }
            },
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
