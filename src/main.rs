//! Evil Hangman - CLI
//!
//! Hangman against a host that keeps changing its word. TUI and text modes,
//! plus simulation and analysis tools for the adversarial engine.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{SimpleOptions, SimulateConfig, analyze_letter, run_simple, run_simulation},
    config::{DEFAULT_GUESSES, GameConfig},
    core::Letter,
    interactive::{App, PlayOptions, run_tui},
    output::{print_analysis_result, print_simulation_result},
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman where the host never commits to a word until it has to",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length, 2-40 (default: random in play/simulate, asked in simple)
    #[arg(
        short,
        long,
        global = true,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(2..=40)
    )]
    length: Option<usize>,

    /// Number of wrong guesses allowed, 1-40 (default: 6, asked in simple)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u32).range(1..=40))]
    guesses: Option<u32>,

    /// Wordlist: 'default' (embedded) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Show how many words are still possible
    #[arg(short = 't', long, global = true)]
    running_total: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode without the TUI
    Simple,

    /// Play many games with an automated guesser
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Guesser: candidate (default), frequency, random
        #[arg(short = 's', long, default_value = "candidate")]
        guesser: String,

        /// Seed for word lengths and random guessers
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Show how a letter would split the candidates (requires --length)
    Analyze {
        /// Letter to analyze
        letter: String,

        /// Letters already guessed, in order (e.g. "eta")
        #[arg(short, long)]
        played: Option<String>,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "default": the embedded word list
/// - "<path>": one word per line from a file
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "default" => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}")),
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, &dictionary),
        Commands::Simple => run_simple_command(&cli, &dictionary),
        Commands::Simulate {
            games,
            guesser,
            seed,
        } => run_simulate_command(&cli, &dictionary, games, &guesser, seed),
        Commands::Analyze { letter, played } => {
            run_analyze_command(&cli, &dictionary, &letter, played.as_deref())
        }
    }
}

fn run_play_command(cli: &Cli, dictionary: &[String]) -> Result<()> {
    let options = PlayOptions {
        word_length: cli.length,
        guess_limit: cli.guesses.unwrap_or(DEFAULT_GUESSES),
        running_total: cli.running_total,
        seed: rand::random(),
    };

    let app = App::new(dictionary, options).map_err(|e| anyhow::anyhow!(e))?;
    run_tui(app)
}

fn run_simple_command(cli: &Cli, dictionary: &[String]) -> Result<()> {
    let options = SimpleOptions {
        word_length: cli.length,
        guess_limit: cli.guesses,
        running_total: cli.running_total.then_some(true),
    };

    run_simple(dictionary, &options).map_err(|e| anyhow::anyhow!(e))
}

fn run_simulate_command(
    cli: &Cli,
    dictionary: &[String],
    games: usize,
    guesser: &str,
    seed: u64,
) -> Result<()> {
    let config = SimulateConfig {
        games,
        word_length: cli.length,
        guess_limit: cli.guesses.unwrap_or(DEFAULT_GUESSES),
        guesser: guesser.to_string(),
        seed,
    };

    println!("Simulating {games} games with the {guesser} guesser...");
    let result = run_simulation(&config, dictionary, true).map_err(|e| anyhow::anyhow!(e))?;
    print_simulation_result(&result);
    Ok(())
}

fn run_analyze_command(
    cli: &Cli,
    dictionary: &[String],
    letter: &str,
    played: Option<&str>,
) -> Result<()> {
    let Some(word_length) = cli.length else {
        bail!("analyze needs a word length; pass --length");
    };
    let config = GameConfig::new(word_length, cli.guesses.unwrap_or(DEFAULT_GUESSES))?;

    let letter = Letter::parse(letter)?;
    let played = played
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(Letter::new)
        .collect::<Result<Vec<_>, _>>()?;

    let result =
        analyze_letter(&config, dictionary, &played, letter).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}
