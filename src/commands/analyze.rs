//! Letter analysis command
//!
//! Shows how one letter would split the current candidates into word families
//! and which family the engine would keep.

use crate::config::GameConfig;
use crate::core::Letter;
use crate::game::GameState;
use std::cmp::Reverse;

/// How many member words to show per family
const SAMPLE_SIZE: usize = 5;

/// One word family in an analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySummary {
    pub key: String,
    pub size: usize,
    pub sample: Vec<String>,
    pub selected: bool,
}

/// Result of analyzing a letter
#[derive(Debug)]
pub struct AnalysisResult {
    pub letter: char,
    pub pattern: String,
    pub guesses_remaining: u32,
    pub total_candidates: usize,
    /// Largest family first; equal sizes keep partition order
    pub families: Vec<FamilySummary>,
    /// The kept family reveals the letter
    pub revealed: bool,
}

/// Replay `played`, then analyze `letter`
///
/// # Errors
///
/// Returns an error if the game is over before `letter` could be guessed.
pub fn analyze_letter<S: AsRef<str>>(
    config: &GameConfig,
    dictionary: &[S],
    played: &[Letter],
    letter: Letter,
) -> Result<AnalysisResult, String> {
    let mut game = GameState::new(config, dictionary);

    if game.candidate_count() == 0 {
        return Err(format!(
            "No words of length {} in the word list",
            config.word_length()
        ));
    }

    for &prior in played {
        if game.is_over() {
            break;
        }
        game.guess(prior);
    }

    if game.is_over() {
        let letters: String = played.iter().map(|l| l.as_char()).collect();
        return Err(format!("Game is already over after guessing {letters}"));
    }

    let partition = game.word_families(letter);
    let mut families: Vec<FamilySummary> = partition
        .families
        .iter()
        .enumerate()
        .map(|(i, family)| FamilySummary {
            key: family.key().to_string(),
            size: family.len(),
            sample: family
                .words()
                .iter()
                .take(SAMPLE_SIZE)
                .map(|w| w.text().to_string())
                .collect(),
            selected: partition.selected == Some(i),
        })
        .collect();
    families.sort_by_key(|f| Reverse(f.size));

    let revealed = partition
        .selected_family()
        .is_some_and(|f| f.key() != game.pattern());

    Ok(AnalysisResult {
        letter: letter.as_char(),
        pattern: game.pattern().to_string(),
        guesses_remaining: game.guesses_remaining(),
        total_candidates: game.candidate_count(),
        families,
        revealed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    const ANIMALS: [&str; 6] = ["cat", "bat", "hat", "dog", "pig", "cow"];

    #[test]
    fn families_sorted_by_size() {
        let config = GameConfig::new(3, 6).unwrap();
        let result = analyze_letter(&config, &ANIMALS, &[], letter('a')).unwrap();

        assert_eq!(result.letter, 'A');
        assert_eq!(result.pattern, "___");
        assert_eq!(result.total_candidates, 6);
        assert_eq!(result.families.len(), 2);
        // _A_ and ___ both hold three words; _A_ was seen first
        assert_eq!(result.families[0].key, "_A_");
        assert_eq!(result.families[1].key, "___");
        assert!(result.families[1].selected);
        assert!(!result.revealed);
    }

    #[test]
    fn replays_prior_letters() {
        let config = GameConfig::new(3, 6).unwrap();
        let result = analyze_letter(&config, &ANIMALS, &[letter('a')], letter('o')).unwrap();

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.guesses_remaining, 5);
        let selected: Vec<_> = result.families.iter().filter(|f| f.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].key, "_O_");
        assert!(result.revealed);
    }

    #[test]
    fn sample_is_capped() {
        let words = ["aa", "ab", "ac", "ad", "ae", "af", "ag"];
        let config = GameConfig::new(2, 6).unwrap();
        let result = analyze_letter(&config, &words, &[], letter('z')).unwrap();

        assert_eq!(result.families[0].size, 7);
        assert_eq!(result.families[0].sample.len(), SAMPLE_SIZE);
    }

    #[test]
    fn errors_when_game_already_over() {
        let config = GameConfig::new(3, 1).unwrap();
        let result = analyze_letter(&config, &ANIMALS, &[letter('z')], letter('a'));
        assert!(result.is_err());
    }

    #[test]
    fn errors_without_words_of_length() {
        let config = GameConfig::new(7, 6).unwrap();
        assert!(analyze_letter(&config, &ANIMALS, &[], letter('a')).is_err());
    }
}
