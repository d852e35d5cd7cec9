//! Simple interactive CLI mode
//!
//! Text-based Hangman session without the TUI. The session reads from any
//! `BufRead` and writes to any `Write`, so it can be scripted in tests.

use crate::config::{GameConfig, MAX_GUESSES, MAX_WORD_LENGTH, MIN_GUESSES, MIN_WORD_LENGTH};
use crate::core::Letter;
use crate::game::GameState;
use crate::output::formatters::format_char_list;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Settings given up front; anything missing is asked for
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleOptions {
    pub word_length: Option<usize>,
    pub guess_limit: Option<u32>,
    pub running_total: Option<bool>,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: AsRef<str>>(dictionary: &[S], options: &SimpleOptions) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_session(&mut input, &mut output, dictionary, options)
}

/// Play games until the player stops or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R, W, S>(
    input: &mut R,
    output: &mut W,
    dictionary: &[S],
    options: &SimpleOptions,
) -> Result<(), String>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    let mut console = Console { input, output };

    console.say(&format!(
        "\n{}\n",
        "Evil Hangman - I have a word in mind. Probably.".bright_cyan().bold()
    ))?;

    loop {
        let Some(config) = console.read_config(options)? else {
            return Ok(());
        };
        let running_total = match options.running_total {
            Some(flag) => flag,
            None => {
                let prompt = "Show a running total of possible words? 1 (yes), 0 (no)";
                match console.read_number(prompt, 0, 1)? {
                    Some(choice) => choice == 1,
                    None => return Ok(()),
                }
            }
        };

        let mut game = GameState::new(&config, dictionary);
        if game.candidate_count() == 0 {
            console.say(&format!(
                "No words of length {} in the word list.",
                config.word_length()
            ))?;
        }

        if !console.play(&mut game, running_total)? {
            return Ok(());
        }

        match console.read_line("Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                console.say("")?;
            }
            _ => {
                console.say("\nThanks for playing!")?;
                return Ok(());
            }
        }
    }
}

struct Console<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Console<'_, R, W> {
    fn say(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{text}").map_err(|e| e.to_string())
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, String> {
        write!(self.output, "{prompt}: ").map_err(|e| e.to_string())?;
        self.output.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;

        if read == 0 {
            self.say("")?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read an integer in `min..=max`, asking again until one is given
    fn read_number(&mut self, prompt: &str, min: u64, max: u64) -> Result<Option<u64>, String> {
        let mut prompt = prompt.to_string();
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };

            prompt = match line.parse::<u64>() {
                Ok(n) if n > max => "Too many. Try again".to_string(),
                Ok(n) if n < min => "Too few. Try again".to_string(),
                Ok(n) => return Ok(Some(n)),
                Err(_) => "Please enter a whole number. Try again".to_string(),
            };
        }
    }

    fn read_config(&mut self, options: &SimpleOptions) -> Result<Option<GameConfig>, String> {
        let word_length = match options.word_length {
            Some(len) => len,
            None => {
                let prompt = format!("Word length ({MIN_WORD_LENGTH}-{MAX_WORD_LENGTH})");
                match self.read_number(&prompt, MIN_WORD_LENGTH as u64, MAX_WORD_LENGTH as u64)? {
                    Some(n) => n as usize,
                    None => return Ok(None),
                }
            }
        };

        let guess_limit = match options.guess_limit {
            Some(limit) => limit,
            None => {
                let prompt = format!("Number of guesses allowed ({MIN_GUESSES}-{MAX_GUESSES})");
                match self.read_number(&prompt, u64::from(MIN_GUESSES), u64::from(MAX_GUESSES))? {
                    Some(n) => n as u32,
                    None => return Ok(None),
                }
            }
        };

        GameConfig::new(word_length, guess_limit)
            .map(Some)
            .map_err(|e| e.to_string())
    }

    /// Read a letter the player has not tried yet
    fn read_letter(&mut self, game: &GameState) -> Result<Option<Letter>, String> {
        let mut prompt = "Your guess".to_string();
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };

            if matches!(line.to_lowercase().as_str(), "quit" | "exit") {
                return Ok(None);
            }

            prompt = match Letter::parse(&line) {
                Ok(letter) if game.has_guessed(letter) => {
                    format!("You already tried {letter}. Pick another letter")
                }
                Ok(letter) => return Ok(Some(letter)),
                Err(e) => format!("{e}. Please enter one letter"),
            };
        }
    }

    fn show_status(&mut self, game: &GameState, running_total: bool) -> Result<(), String> {
        if running_total {
            self.say(&format!("Possible words:    {}", game.candidate_count()))?;
        }
        self.say(&format!("Guesses remaining: {}", game.guesses_remaining()))?;
        self.say(&format!(
            "Guessed letters:   {}",
            format_char_list(&game.guessed_letters())
        ))?;
        self.say(&format!(
            "Current word:      {}",
            format_char_list(&game.current_pattern())
        ))
    }

    /// Play one game; returns false if the player left mid-game
    fn play(&mut self, game: &mut GameState, running_total: bool) -> Result<bool, String> {
        while !game.is_over() {
            self.say("")?;
            self.show_status(game, running_total)?;

            let Some(letter) = self.read_letter(game)? else {
                self.say("\nThanks for playing!")?;
                return Ok(false);
            };

            if game.guess(letter).succeeded() {
                self.say(&format!("{}", format!("Yes, there is a {letter}.").green()))?;
            } else {
                self.say(&format!("{}", format!("Sorry, no {letter}.").red()))?;
            }
        }

        self.say("")?;
        if game.player_wins() {
            self.say(&format!("Final word: {}", format_char_list(&game.current_pattern())))?;
        }

        let banner = if game.player_wins() {
            "You won!".bright_green().bold()
        } else {
            "You lose!".bright_red().bold()
        };
        let answer = game
            .final_answer()
            .map_or_else(|| "(no word)".to_string(), |w| w.text().to_string());
        self.say(&format!("{banner} The word was: {}", answer.bright_yellow()))?;

        Ok(true)
    }
}
