//! TUI application state and logic

use crate::config::{GameConfig, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::core::Letter;
use crate::game::{GameState, GuessOutcome};
use crate::wordlists::loader::available_lengths;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Settings for a TUI session
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    /// Fixed word length, or `None` to draw one per game
    pub word_length: Option<usize>,
    pub guess_limit: u32,
    pub running_total: bool,
    /// Seed for drawing word lengths
    pub seed: u64,
}

/// Application state
pub struct App<'a> {
    pub dictionary: &'a [String],
    pub config: GameConfig,
    pub game: GameState,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_running_total: bool,
    pub should_quit: bool,
    pub undo_stack: Vec<GameState>,
    fixed_length: Option<usize>,
    lengths: Vec<usize>,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl<'a> App<'a> {
    /// Set up a session and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are out of range or the dictionary
    /// has no words of a playable length.
    pub fn new(dictionary: &'a [String], options: PlayOptions) -> Result<Self, String> {
        let lengths = match options.word_length {
            Some(len) => vec![len],
            None => available_lengths(dictionary, MIN_WORD_LENGTH, MAX_WORD_LENGTH),
        };
        let first_length = *lengths
            .first()
            .ok_or_else(|| "Dictionary has no words of a playable length".to_string())?;
        let config =
            GameConfig::new(first_length, options.guess_limit).map_err(|e| e.to_string())?;

        let mut app = Self {
            dictionary,
            config,
            // placeholder until new_game below
            game: GameState::new(&config, std::iter::empty::<&str>()),
            input_mode: InputMode::Guessing,
            messages: Vec::new(),
            stats: Statistics::default(),
            show_running_total: options.running_total,
            should_quit: false,
            undo_stack: Vec::new(),
            fixed_length: options.word_length,
            lengths,
            rng: StdRng::seed_from_u64(options.seed),
        };
        app.new_game();
        Ok(app)
    }

    /// Start a fresh game, drawing a new word length unless one is fixed
    pub fn new_game(&mut self) {
        let word_length = self
            .fixed_length
            .or_else(|| self.lengths.choose(&mut self.rng).copied())
            .unwrap_or(self.config.word_length());

        if let Ok(config) = GameConfig::new(word_length, self.config.guess_limit()) {
            self.config = config;
        }

        self.game = GameState::new(&self.config, self.dictionary);
        self.undo_stack.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "I'm thinking of a {}-letter word. You have {} wrong guesses.",
                self.config.word_length(),
                self.config.guess_limit()
            ),
            MessageStyle::Info,
        );

        if self.game.is_over() {
            self.add_message(
                &format!("No words of length {word_length} in the word list."),
                MessageStyle::Error,
            );
            self.finish_game();
        }
    }

    /// Guess the letter for a key press
    pub fn handle_letter(&mut self, ch: char) {
        if self.input_mode == InputMode::GameOver {
            return;
        }

        let letter = match Letter::new(ch) {
            Ok(letter) => letter,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if self.game.has_guessed(letter) {
            self.add_message(
                &format!("You already guessed {letter}"),
                MessageStyle::Error,
            );
            return;
        }

        self.undo_stack.push(self.game.clone());

        match self.game.guess(letter) {
            GuessOutcome::Revealed => {
                self.add_message(&format!("Yes, there is a {letter}."), MessageStyle::Success);
            }
            GuessOutcome::Missed => {
                self.add_message(&format!("Sorry, no {letter}."), MessageStyle::Error);
            }
            GuessOutcome::Finished(_) => {}
        }

        if self.game.is_over() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;
        self.undo_stack.clear();

        if self.game.player_wins() {
            self.stats.games_won += 1;
            self.add_message("You won! Against all odds.", MessageStyle::Success);
        } else {
            let answer = self
                .game
                .final_answer()
                .map_or_else(|| "(no word)".to_string(), |w| w.text().to_string());
            self.add_message(
                &format!("You lose! The word was: {answer}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Take back the last guess of the current game
    pub fn undo_last(&mut self) {
        if self.input_mode == InputMode::GameOver {
            self.add_message("The game is over; press 'n' for a new one", MessageStyle::Error);
            return;
        }

        if let Some(previous) = self.undo_stack.pop() {
            self.game = previous;
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn toggle_running_total(&mut self) {
        self.show_running_total = !self.show_running_total;
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
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match (app.input_mode, key.code) {
                (_, KeyCode::Esc) => app.should_quit = true,
                (_, KeyCode::Tab) => app.toggle_running_total(),
                (InputMode::Guessing, KeyCode::Backspace) => app.undo_last(),
                (InputMode::Guessing, KeyCode::Char(c)) if !app.should_quit => {
                    app.handle_letter(c);
                }
                (InputMode::GameOver, KeyCode::Char('n')) => app.new_game(),
                (InputMode::GameOver, KeyCode::Char('q')) => app.should_quit = true,
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
