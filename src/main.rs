//! Unscramble - CLI
//!
//! Terminal word-unscrambling game with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use unscramble::{
    commands::{run_simple, scramble_word},
    core::Word,
    game::{GameConfig, GameSession},
    output::print_scramble_result,
    wordlists::{VOCABULARY, loader},
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Terminal word-unscrambling game: guess the word behind the shuffled letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Number of words per game
    #[arg(short = 'n', long, global = true, default_value_t = 10)]
    max_words: usize,

    /// Points awarded per correct guess
    #[arg(long, global = true, default_value_t = 20)]
    score_increase: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Scramble a specific word and print the result
    Scramble {
        /// Word to scramble
        word: String,

        /// Number of scrambled variants to print
        #[arg(short, long, default_value_t = 3)]
        count: usize,
    },
}

/// Load the vocabulary based on the -w flag
///
/// "builtin" uses the embedded word list; anything else is treated as a
/// path to a word list file.
fn load_vocabulary(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "builtin" => Ok(loader::words_from_slice(VOCABULARY)),
        path => Ok(loader::load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    anyhow::ensure!(cli.max_words > 0, "--max-words must be at least 1");

    let vocabulary = load_vocabulary(&cli.wordlist)?;
    anyhow::ensure!(
        !vocabulary.is_empty(),
        "wordlist '{}' contains no usable words",
        cli.wordlist
    );

    let config = GameConfig {
        max_words: cli.max_words,
        score_increase: cli.score_increase,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&vocabulary, config),
        Commands::Simple => run_simple_command(&vocabulary, config),
        Commands::Scramble { word, count } => run_scramble_command(&word, count),
    }
}

fn run_play_command(vocabulary: &[Word], config: GameConfig) -> Result<()> {
    use unscramble::interactive::{App, run_tui};

    let app = App::new(vocabulary, config);
    run_tui(app)
}

fn run_simple_command(vocabulary: &[Word], config: GameConfig) -> Result<()> {
    let mut session = GameSession::new(vocabulary, config, rand::rng());
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_scramble_command(word: &str, count: usize) -> Result<()> {
    let mut rng = rand::rng();
    let result = scramble_word(word, count, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    print_scramble_result(&result.word, &result.variants);
    if !result.scramblable {
        println!("Note: '{}' has no distinct permutation.", result.word);
    }
    Ok(())
}
