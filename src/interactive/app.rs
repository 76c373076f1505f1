//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameConfig, GameSession, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest guess the input buffer accepts
const MAX_GUESS_LEN: usize = 24;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a, ThreadRng>,
    pub input_buffer: String,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    FinalScore,
}

/// How a presented word was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Guessed,
    Skipped,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub word: String,
    pub resolution: Resolution,
    pub score_after: u32,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
    pub last_score: u32,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(vocabulary: &'a [Word], config: GameConfig) -> Self {
        let session = GameSession::new(vocabulary, config, rand::rng());

        let input_mode = if session.is_finished() {
            InputMode::FinalScore
        } else {
            InputMode::Guessing
        };

        Self {
            session,
            input_buffer: String::new(),
            history: Vec::new(),
            messages: vec![
                Message {
                    text: "Welcome! Unscramble the letters to find the word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type your guess and press Enter. TAB skips the word.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode,
        }
    }

    /// Submit the current input buffer as a guess
    pub fn submit(&mut self) {
        if self.input_buffer.is_empty() {
            self.add_message("Type a guess first!", MessageStyle::Error);
            return;
        }

        let guess = self.input_buffer.clone();
        match self.session.submit_guess(&guess) {
            GuessOutcome::Correct => {
                self.history.push(HistoryEntry {
                    word: guess,
                    resolution: Resolution::Guessed,
                    score_after: self.session.score(),
                });
                self.input_buffer.clear();
                self.add_message(
                    &format!("Correct! +{} points", self.session.config().score_increase),
                    MessageStyle::Success,
                );
                self.check_finished();
            }
            GuessOutcome::Incorrect => {
                // Same word stays on screen; buffer kept for editing
                self.add_message("Not the word — try again!", MessageStyle::Error);
            }
        }
    }

    /// Skip the current word without scoring
    pub fn skip(&mut self) {
        if let Some(skipped) = self.session.skip() {
            self.history.push(HistoryEntry {
                word: skipped.text().to_string(),
                resolution: Resolution::Skipped,
                score_after: self.session.score(),
            });
            self.input_buffer.clear();
            self.add_message(
                &format!("Skipped! The word was {}", skipped.text().to_uppercase()),
                MessageStyle::Info,
            );
            self.check_finished();
        }
    }

    pub fn new_game(&mut self) {
        self.session.restart();
        self.history.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    fn check_finished(&mut self) {
        if !self.session.is_finished() {
            return;
        }

        let score = self.session.score();
        self.stats.games_played += 1;
        self.stats.last_score = score;
        self.stats.best_score = self.stats.best_score.max(score);
        self.input_mode = InputMode::FinalScore;

        self.add_message(
            &format!("Game over! You scored {score} points."),
            MessageStyle::Success,
        );
        self.add_message("Press 'n' to play again or 'q' to quit.", MessageStyle::Info);
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.len() < MAX_GUESS_LEN && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::FinalScore => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n' | 'p') => {
                        app.new_game();
                    }
                    _ => {
                        // On the final-score screen, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.skip();
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
                    KeyCode::Char(c) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
