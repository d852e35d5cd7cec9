//! Simulation command
//!
//! Plays many games with an automated guesser and collects statistics on how
//! long the engine holds out. Games are independent, so they run in parallel.

use crate::config::{GameConfig, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::game::GameState;
use crate::players::{Guesser, GuesserType};
use crate::wordlists::loader::available_lengths;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub games: usize,
    /// Fixed word length, or `None` to draw one per game
    pub word_length: Option<usize>,
    pub guess_limit: u32,
    pub guesser: String,
    pub seed: u64,
}

/// Result from one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub word_length: usize,
    pub won: bool,
    pub letters_guessed: usize,
    pub misses: usize,
    pub starting_candidates: usize,
    pub final_answer: Option<String>,
}

/// Per-length totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthStats {
    pub games: usize,
    pub wins: usize,
    pub letters_guessed: usize,
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub guesser: &'static str,
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_letters: f64,
    pub average_misses: f64,
    pub by_length: BTreeMap<usize, LengthStats>,
    pub longest_game: Option<GameRecord>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game to the end
///
/// Stops early only if the guesser runs out of letters.
pub fn play_game<G: Guesser>(game: &mut GameState, guesser: &mut G) -> GameRecord {
    let starting_candidates = game.candidate_count();

    while !game.is_over() {
        let Some(letter) = guesser.next_letter(game) else {
            break;
        };
        game.guess(letter);
    }

    let history = game.history();
    GameRecord {
        word_length: game.word_length(),
        won: game.player_wins(),
        letters_guessed: history.len(),
        misses: history.iter().filter(|r| !r.revealed).count(),
        starting_candidates,
        final_answer: game.final_answer().map(|w| w.text().to_string()),
    }
}

/// Run a simulation over the given dictionary
///
/// Each game gets its own seed derived from `config.seed`, so results do not
/// depend on thread scheduling.
///
/// # Errors
///
/// Returns an error if the guesser name is unknown, the settings are out of
/// range, or the dictionary has no usable word lengths.
pub fn run_simulation<S: AsRef<str> + Sync>(
    config: &SimulateConfig,
    dictionary: &[S],
    show_progress: bool,
) -> Result<SimulationResult, String> {
    if !GuesserType::NAMES.contains(&config.guesser.as_str()) {
        return Err(format!(
            "Unknown guesser '{}'. Choose one of: {}",
            config.guesser,
            GuesserType::NAMES.join(", ")
        ));
    }

    let lengths = match config.word_length {
        Some(len) => vec![len],
        None => available_lengths(dictionary, MIN_WORD_LENGTH, MAX_WORD_LENGTH),
    };
    if lengths.is_empty() {
        return Err("Dictionary has no words of a playable length".to_string());
    }

    let game_configs = lengths
        .iter()
        .map(|&len| GameConfig::new(len, config.guess_limit))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    let pb = if show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("guesser: {}", config.guesser));

    let start = Instant::now();

    let records: Vec<GameRecord> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let game_seed = config.seed.wrapping_add(i as u64);
            let mut rng = StdRng::seed_from_u64(game_seed);
            let game_config = game_configs[rng.random_range(0..game_configs.len())];

            let mut game = GameState::new(&game_config, dictionary);
            let mut guesser = GuesserType::from_name(&config.guesser, game_seed);
            let record = play_game(&mut game, &mut guesser);

            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let guesser = GuesserType::from_name(&config.guesser, config.seed).name();

    Ok(summarize(guesser, &records, duration))
}

fn summarize(
    guesser: &'static str,
    records: &[GameRecord],
    duration: Duration,
) -> SimulationResult {
    let total_games = records.len();
    let wins = records.iter().filter(|r| r.won).count();

    let mut by_length: BTreeMap<usize, LengthStats> = BTreeMap::new();
    for record in records {
        let stats = by_length.entry(record.word_length).or_default();
        stats.games += 1;
        stats.wins += usize::from(record.won);
        stats.letters_guessed += record.letters_guessed;
    }

    let (average_letters, average_misses) = if total_games > 0 {
        let letters: usize = records.iter().map(|r| r.letters_guessed).sum();
        let misses: usize = records.iter().map(|r| r.misses).sum();
        (
            letters as f64 / total_games as f64,
            misses as f64 / total_games as f64,
        )
    } else {
        (0.0, 0.0)
    };

    // first game wins ties so the pick is stable
    let longest_game = records
        .iter()
        .rev()
        .max_by_key(|r| r.letters_guessed)
        .cloned();

    let seconds = duration.as_secs_f64();
    SimulationResult {
        guesser,
        total_games,
        wins,
        losses: total_games - wins,
        average_letters,
        average_misses,
        by_length,
        longest_game,
        duration,
        games_per_second: if seconds > 0.0 {
            total_games as f64 / seconds
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::FrequencyGuesser;
    use crate::wordlists::DICTIONARY;

    fn config(games: usize, word_length: Option<usize>, guesser: &str) -> SimulateConfig {
        SimulateConfig {
            games,
            word_length,
            guess_limit: 6,
            guesser: guesser.to_string(),
            seed: 11,
        }
    }

    #[test]
    fn play_game_reaches_the_end() {
        let game_config = GameConfig::new(5, 26).unwrap();
        let mut game = GameState::new(&game_config, DICTIONARY);

        let record = play_game(&mut game, &mut FrequencyGuesser);

        assert!(game.is_over());
        assert!(record.letters_guessed <= 26);
        assert_eq!(record.word_length, 5);
        assert!(record.final_answer.is_some());
        assert_eq!(record.won, game.player_wins());
    }

    #[test]
    fn play_game_on_empty_dictionary() {
        let game_config = GameConfig::new(5, 6).unwrap();
        let mut game = GameState::new(&game_config, ["cat"]);

        let record = play_game(&mut game, &mut FrequencyGuesser);

        assert!(!record.won);
        assert_eq!(record.letters_guessed, 0);
        assert_eq!(record.starting_candidates, 0);
        assert_eq!(record.final_answer, None);
    }

    #[test]
    fn simulation_counts_add_up() {
        let result = run_simulation(&config(12, None, "random"), DICTIONARY, false).unwrap();

        assert_eq!(result.total_games, 12);
        assert_eq!(result.wins + result.losses, 12);
        assert_eq!(
            result.by_length.values().map(|s| s.games).sum::<usize>(),
            12
        );
        assert!(result.average_letters >= result.average_misses);
        assert!(result.longest_game.is_some());
        assert_eq!(result.guesser, "random");
    }

    #[test]
    fn simulation_is_reproducible() {
        let first = run_simulation(&config(8, None, "random"), DICTIONARY, false).unwrap();
        let second = run_simulation(&config(8, None, "random"), DICTIONARY, false).unwrap();

        assert_eq!(first.wins, second.wins);
        assert_eq!(first.by_length, second.by_length);
        assert_eq!(first.longest_game, second.longest_game);
    }

    #[test]
    fn fixed_length_is_respected() {
        let result = run_simulation(&config(5, Some(4), "frequency"), DICTIONARY, false).unwrap();
        assert_eq!(result.by_length.keys().copied().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn unknown_guesser_is_rejected() {
        let result = run_simulation(&config(1, Some(4), "psychic"), DICTIONARY, false);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_length_is_rejected() {
        let result = run_simulation(&config(1, Some(1), "frequency"), DICTIONARY, false);
        assert!(result.is_err());
    }

    #[test]
    fn dictionary_without_playable_lengths_is_rejected() {
        let result = run_simulation(&config(1, None, "frequency"), &["a", "i"], false);
        assert!(result.is_err());
    }

    #[test]
    fn zero_games() {
        let result = run_simulation(&config(0, Some(5), "candidate"), DICTIONARY, false).unwrap();
        assert_eq!(result.total_games, 0);
        assert!(result.longest_game.is_none());
        assert!(result.average_letters.abs() < f64::EPSILON);
    }
}
