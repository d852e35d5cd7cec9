//! Adversarial Hangman engine
//!
//! The engine never picks a secret word. After every guess it splits the
//! surviving candidates into word families by the pattern the guessed letter
//! would reveal, and keeps whichever family is worst for the player.

use crate::config::GameConfig;
use crate::core::{Letter, Pattern, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Result of a finished (or unfinished) game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Undecided,
    Won,
    Lost,
}

/// What a call to [`GameState::guess`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was revealed in at least one position
    Revealed,
    /// The letter was not revealed; one guess was spent
    Missed,
    /// The game was already over; nothing changed
    Finished(Verdict),
}

impl GuessOutcome {
    /// Boolean view: a reveal, or a replayed winning verdict
    #[must_use]
    pub const fn succeeded(self) -> bool {
        matches!(self, Self::Revealed | Self::Finished(Verdict::Won))
    }
}

/// One applied guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub letter: Letter,
    pub revealed: bool,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Candidates sharing one reveal key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFamily {
    key: Pattern,
    words: Vec<Word>,
}

impl WordFamily {
    /// The pattern every word in this family would reveal
    #[must_use]
    pub const fn key(&self) -> &Pattern {
        &self.key
    }

    /// Member words, in candidate order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// All families one letter splits the candidates into
///
/// Families are ordered by first appearance of their key while scanning the
/// candidates. `selected` is the family the engine would keep.
#[derive(Debug, Clone)]
pub struct Partition {
    pub families: Vec<WordFamily>,
    pub selected: Option<usize>,
}

impl Partition {
    /// The family the engine would keep
    #[must_use]
    pub fn selected_family(&self) -> Option<&WordFamily> {
        self.selected.and_then(|i| self.families.get(i))
    }
}

/// State of one game of Evil Hangman
#[derive(Debug, Clone)]
pub struct GameState {
    pattern: Pattern,
    candidates: Vec<Word>,
    guesses_remaining: u32,
    guessed: BTreeSet<Letter>,
    final_answer: Option<Word>,
    history: Vec<GuessRecord>,
}

impl GameState {
    /// Start a game over the dictionary entries of the configured length
    ///
    /// Entries are normalized to uppercase and kept whole, so characters that
    /// are not letters stay hidden for the whole game. Duplicates are kept. When nothing matches
    /// the length, the game is over (and lost) straight away.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::config::GameConfig;
    /// use evil_hangman::core::Letter;
    /// use evil_hangman::game::GameState;
    ///
    /// let config = GameConfig::new(5, 6).unwrap();
    /// let mut game = GameState::new(&config, ["apple", "grape", "stone", "table"]);
    ///
    /// assert!(game.guess(Letter::new('e').unwrap()).succeeded());
    /// assert_eq!(game.pattern().to_string(), "____E");
    /// assert_eq!(game.candidate_count(), 4);
    /// ```
    pub fn new<I, S>(config: &GameConfig, dictionary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let word_length = config.word_length();
        let candidates = dictionary
            .into_iter()
            .map(Word::from_entry)
            .filter(|word| word.len() == word_length)
            .collect();

        Self {
            pattern: Pattern::blank(word_length),
            candidates,
            guesses_remaining: config.guess_limit(),
            guessed: BTreeSet::new(),
            final_answer: None,
            history: Vec::new(),
        }
    }

    /// Guess a letter
    ///
    /// Keeps the largest word family. On the last remaining guess, the family
    /// that reveals nothing is kept whenever it exists. Calls made after the
    /// game is over change nothing and report the verdict.
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Finished(self.verdict());
        }

        let candidates_before = self.candidates.len();
        let Partition {
            mut families,
            selected,
        } = self.partition(letter);
        self.guessed.insert(letter);

        let Some(index) = selected else {
            // nothing to choose from; no budget is spent
            self.record(letter, false, candidates_before);
            return GuessOutcome::Missed;
        };

        let WordFamily { key, words } = families.swap_remove(index);
        self.final_answer = words.first().cloned();
        self.candidates = words;

        if key == self.pattern {
            self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
            self.record(letter, false, candidates_before);
            GuessOutcome::Missed
        } else {
            self.pattern = key;
            self.record(letter, true, candidates_before);
            GuessOutcome::Revealed
        }
    }

    /// The word families a letter would produce, without guessing it
    #[must_use]
    pub fn word_families(&self, letter: Letter) -> Partition {
        self.partition(letter)
    }

    /// Game over: out of guesses, word revealed, or no candidates left
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.guesses_remaining == 0 || self.pattern.is_complete() || self.candidates.is_empty()
    }

    /// Win/loss once the game is over, `Undecided` before
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if !self.is_over() {
            Verdict::Undecided
        } else if self.pattern.is_complete() {
            Verdict::Won
        } else {
            Verdict::Lost
        }
    }

    #[must_use]
    pub fn player_wins(&self) -> bool {
        self.verdict() == Verdict::Won
    }

    /// The word the engine "was thinking of"
    ///
    /// Only available once the game is over.
    #[must_use]
    pub fn final_answer(&self) -> Option<&Word> {
        if self.is_over() {
            self.final_answer.as_ref()
        } else {
            None
        }
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Pattern cells as characters, blanks included
    #[must_use]
    pub fn current_pattern(&self) -> Vec<char> {
        self.pattern.to_chars()
    }

    /// Guessed letters in alphabetical order
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        self.guessed.iter().map(|l| l.as_char()).collect()
    }

    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Surviving candidates, read-only
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn guesses_remaining(&self) -> u32 {
        self.guesses_remaining
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.pattern.len()
    }

    /// Applied guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    fn record(&mut self, letter: Letter, revealed: bool, candidates_before: usize) {
        self.history.push(GuessRecord {
            letter,
            revealed,
            candidates_before,
            candidates_after: self.candidates.len(),
        });
    }

    /// Group candidates by reveal key and pick the family to keep
    fn partition(&self, letter: Letter) -> Partition {
        let mut index: FxHashMap<Pattern, usize> = FxHashMap::default();
        let mut families: Vec<WordFamily> = Vec::new();

        for word in &self.candidates {
            let key = self.pattern.reveal_key(word, letter);
            if let Some(&i) = index.get(&key) {
                families[i].words.push(word.clone());
            } else {
                index.insert(key.clone(), families.len());
                families.push(WordFamily {
                    key,
                    words: vec![word.clone()],
                });
            }
        }

        let selected = select_family(&families, &self.pattern, self.guesses_remaining);
        Partition { families, selected }
    }
}

/// Index of the family the engine keeps
///
/// With one guess left, the family whose key is the unchanged pattern wins
/// outright. Otherwise the largest family wins; ties go to the unchanged
/// pattern, then to the earliest family.
fn select_family(
    families: &[WordFamily],
    pattern: &Pattern,
    guesses_remaining: u32,
) -> Option<usize> {
    let unchanged = families.iter().position(|f| &f.key == pattern);

    if guesses_remaining == 1 && unchanged.is_some() {
        return unchanged;
    }

    let mut best: Option<usize> = None;
    for (i, family) in families.iter().enumerate() {
        let Some(b) = best else {
            best = Some(i);
            continue;
        };

        let current = &families[b];
        let larger = family.len() > current.len();
        let tie_to_unchanged = family.len() == current.len() && Some(i) == unchanged;
        if larger || tie_to_unchanged {
            best = Some(i);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRUIT: [&str; 4] = ["APPLE", "GRAPE", "STONE", "TABLE"];

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn game(word_length: usize, guess_limit: u32, words: &[&str]) -> GameState {
        let config = GameConfig::new(word_length, guess_limit).unwrap();
        GameState::new(&config, words)
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    fn family(key: &str, words: &[&str]) -> WordFamily {
        WordFamily {
            key: key.parse().unwrap(),
            words: words.iter().map(|w| Word::new(w).unwrap()).collect(),
        }
    }

    #[test]
    fn construction_filters_by_length_and_normalizes() {
        let state = game(5, 6, &["apple", "Pear", "GRAPE", "banana", "co-op", "stone"]);

        assert_eq!(texts(state.candidates()), ["APPLE", "GRAPE", "CO-OP", "STONE"]);
        assert_eq!(state.current_pattern(), vec!['_'; 5]);
        assert_eq!(state.guesses_remaining(), 6);
        assert!(state.guessed_letters().is_empty());
        assert!(!state.is_over());
        assert_eq!(state.verdict(), Verdict::Undecided);
        assert_eq!(state.final_answer(), None);
    }

    #[test]
    fn construction_keeps_entries_with_non_letters() {
        let mut state = game(5, 6, &["DON'T", "CO-OP", "STONE"]);
        assert_eq!(state.candidate_count(), 3);

        assert_eq!(state.guess(letter('z')), GuessOutcome::Missed);
        assert_eq!(state.candidate_count(), 3);

        // _O___, _O_O_ and __O__ each hold one word; the first seen is kept
        assert_eq!(state.guess(letter('o')), GuessOutcome::Revealed);
        assert_eq!(state.pattern().to_string(), "_O___");
        assert_eq!(texts(state.candidates()), ["DON'T"]);
    }

    #[test]
    fn construction_counts_characters_not_bytes() {
        let state = game(4, 6, &["café", "cafe", "cafés"]);
        assert_eq!(texts(state.candidates()), ["CAFÉ", "CAFE"]);
    }

    #[test]
    fn non_letter_cells_stay_hidden() {
        let mut state = game(5, 10, &["don't"]);
        for ch in ['d', 'o', 'n', 't'] {
            state.guess(letter(ch));
        }
        assert_eq!(state.pattern().to_string(), "DON_T");
        assert!(!state.is_over());
    }

    #[test]
    fn construction_keeps_duplicates() {
        let state = game(4, 3, &["ruby", "RUBY", "gems"]);
        assert_eq!(state.candidate_count(), 3);
    }

    #[test]
    fn shared_reveal_key_is_revealed() {
        let mut state = game(5, 6, &FRUIT);

        let outcome = state.guess(letter('E'));

        assert_eq!(outcome, GuessOutcome::Revealed);
        assert!(outcome.succeeded());
        assert_eq!(state.pattern().to_string(), "____E");
        assert_eq!(state.guesses_remaining(), 6);
        assert_eq!(state.candidate_count(), 4);
        assert_eq!(state.guessed_letters(), vec!['E']);
    }

    #[test]
    fn last_guess_absent_letter_loses() {
        let mut state = game(5, 1, &FRUIT);

        let outcome = state.guess(letter('z'));

        assert_eq!(outcome, GuessOutcome::Missed);
        assert!(!outcome.succeeded());
        assert_eq!(state.guesses_remaining(), 0);
        assert!(state.is_over());
        assert!(!state.player_wins());
        assert_eq!(state.verdict(), Verdict::Lost);
        assert_eq!(state.candidate_count(), 4);
        assert_eq!(state.final_answer().map(Word::text), Some("APPLE"));
    }

    #[test]
    fn no_words_of_length_is_lost_immediately() {
        let state = game(9, 6, &FRUIT);

        assert_eq!(state.candidate_count(), 0);
        assert!(state.is_over());
        assert!(!state.player_wins());
        assert_eq!(state.verdict(), Verdict::Lost);
        assert_eq!(state.final_answer(), None);
    }

    #[test]
    fn repeated_letter_is_a_miss() {
        let mut state = game(5, 6, &FRUIT);
        state.guess(letter('e'));
        let before = state.candidates().to_vec();

        let outcome = state.guess(letter('E'));

        assert_eq!(outcome, GuessOutcome::Missed);
        assert_eq!(state.guesses_remaining(), 5);
        assert_eq!(state.candidates(), before.as_slice());
        assert_eq!(state.pattern().to_string(), "____E");
        assert_eq!(state.guessed_letters(), vec!['E']);
    }

    #[test]
    fn largest_family_wins() {
        let mut state = game(4, 6, &["ALLY", "BETA", "COOL", "DEAL", "ELSE"]);

        // A: ALLY -> A___, BETA -> ___A, COOL -> ____, DEAL -> __A_, ELSE -> ____
        let outcome = state.guess(letter('A'));

        assert_eq!(outcome, GuessOutcome::Missed);
        assert_eq!(texts(state.candidates()), ["COOL", "ELSE"]);
        assert_eq!(state.guesses_remaining(), 5);
    }

    #[test]
    fn largest_family_beats_unchanged_pattern() {
        let mut state = game(3, 6, &["CAT", "BAT", "HAT", "DOG"]);

        let outcome = state.guess(letter('a'));

        assert_eq!(outcome, GuessOutcome::Revealed);
        assert_eq!(state.pattern().to_string(), "_A_");
        assert_eq!(texts(state.candidates()), ["CAT", "BAT", "HAT"]);
    }

    #[test]
    fn tie_prefers_unchanged_pattern() {
        // _A_ (CAT, BAT) ties with ___ (DOG, PIG); ___ appears second
        let mut state = game(3, 6, &["CAT", "DOG", "BAT", "PIG"]);

        let outcome = state.guess(letter('a'));

        assert_eq!(outcome, GuessOutcome::Missed);
        assert_eq!(texts(state.candidates()), ["DOG", "PIG"]);
        assert_eq!(state.guesses_remaining(), 5);
    }

    #[test]
    fn last_guess_prefers_unchanged_pattern_over_larger_family() {
        let mut state = game(3, 1, &["CAT", "BAT", "HAT", "DOG"]);

        let outcome = state.guess(letter('a'));

        assert_eq!(outcome, GuessOutcome::Missed);
        assert_eq!(texts(state.candidates()), ["DOG"]);
        assert!(state.is_over());
        assert_eq!(state.final_answer().map(Word::text), Some("DOG"));
    }

    #[test]
    fn last_guess_without_unchanged_family_uses_largest() {
        let mut state = game(3, 1, &["CAT", "BAT", "TAN"]);

        let outcome = state.guess(letter('A'));

        assert_eq!(outcome, GuessOutcome::Revealed);
        assert_eq!(state.guesses_remaining(), 1);
        assert_eq!(state.pattern().to_string(), "_A_");
        assert!(!state.is_over());
    }

    #[test]
    fn full_reveal_wins() {
        let mut state = game(2, 3, &["OX"]);

        assert_eq!(state.guess(letter('o')), GuessOutcome::Revealed);
        assert!(!state.is_over());
        assert_eq!(state.final_answer(), None);

        assert_eq!(state.guess(letter('x')), GuessOutcome::Revealed);
        assert!(state.is_over());
        assert!(state.player_wins());
        assert_eq!(state.final_answer().map(Word::text), Some("OX"));
    }

    #[test]
    fn guess_after_game_over_is_a_no_op() {
        let mut state = game(5, 1, &FRUIT);
        state.guess(letter('z'));
        let pattern = state.pattern().clone();
        let history_len = state.history().len();

        let outcome = state.guess(letter('e'));

        assert_eq!(outcome, GuessOutcome::Finished(Verdict::Lost));
        assert!(!outcome.succeeded());
        assert_eq!(state.pattern(), &pattern);
        assert_eq!(state.guessed_letters(), vec!['Z']);
        assert_eq!(state.history().len(), history_len);
        assert_eq!(state.final_answer().map(Word::text), Some("APPLE"));
    }

    #[test]
    fn guess_after_win_reports_success() {
        let mut state = game(2, 3, &["OX"]);
        state.guess(letter('o'));
        state.guess(letter('x'));

        assert_eq!(state.guess(letter('q')), GuessOutcome::Finished(Verdict::Won));
        assert!(state.guess(letter('q')).succeeded());
    }

    #[test]
    fn guess_on_empty_game_does_not_spend_budget() {
        let mut state = game(7, 4, &FRUIT);

        let outcome = state.guess(letter('a'));

        assert_eq!(outcome, GuessOutcome::Finished(Verdict::Lost));
        assert_eq!(state.guesses_remaining(), 4);
    }

    #[test]
    fn select_family_on_empty_partition() {
        let pattern = Pattern::blank(3);
        assert_eq!(select_family(&[], &pattern, 5), None);
        assert_eq!(select_family(&[], &pattern, 1), None);
    }

    #[test]
    fn select_family_tie_without_unchanged_takes_first() {
        let pattern = Pattern::blank(3);
        let families = [
            family("A__", &["ANT", "ARK"]),
            family("_A_", &["CAT", "BAT"]),
        ];

        assert_eq!(select_family(&families, &pattern, 4), Some(0));
    }

    #[test]
    fn word_families_preview_does_not_mutate() {
        let state = game(3, 6, &["CAT", "DOG", "BAT", "PIG"]);

        let partition = state.word_families(letter('a'));

        assert_eq!(partition.families.len(), 2);
        assert_eq!(partition.families[0].key().to_string(), "_A_");
        assert_eq!(partition.families[1].key().to_string(), "___");
        assert_eq!(partition.selected, Some(1));
        assert_eq!(
            partition.selected_family().map(|f| texts(f.words())),
            Some(vec!["DOG", "PIG"])
        );
        assert!(state.guessed_letters().is_empty());
        assert_eq!(state.candidate_count(), 4);
    }

    #[test]
    fn history_records_each_applied_guess() {
        let mut state = game(3, 6, &["CAT", "BAT", "HAT", "DOG"]);
        state.guess(letter('a'));
        state.guess(letter('z'));

        let history = state.history();
        assert_eq!(history.len(), 2);
        assert_eq!(
            history[0],
            GuessRecord {
                letter: letter('A'),
                revealed: true,
                candidates_before: 4,
                candidates_after: 3,
            }
        );
        assert!(!history[1].revealed);
        assert_eq!(history[1].candidates_after, 3);
    }

    #[test]
    fn guessed_letters_sorted() {
        let mut state = game(5, 10, &FRUIT);
        for ch in ['t', 'b', 'z', 'a'] {
            state.guess(letter(ch));
        }
        assert_eq!(state.guessed_letters(), vec!['A', 'B', 'T', 'Z']);
    }

    /// Plays every letter in a fixed order, checking the invariants after each guess
    fn play_checking_invariants(words: &[&str], word_length: usize, guess_limit: u32, order: &str) {
        let mut state = game(word_length, guess_limit, words);
        let mut calls = 0;

        for ch in order.chars() {
            if state.is_over() {
                break;
            }
            let guess = letter(ch);
            if state.has_guessed(guess) {
                continue;
            }

            let count_before = state.candidate_count();
            let pattern_before = state.pattern().clone();
            let budget_before = state.guesses_remaining();

            let outcome = state.guess(guess);
            calls += 1;

            assert!(state.candidate_count() <= count_before);

            for position in 0..pattern_before.len() {
                if let Some(cell) = pattern_before.cell(position) {
                    assert_eq!(state.pattern().cell(position), Some(cell));
                }
            }

            let guessed: Vec<Letter> = state
                .guessed_letters()
                .into_iter()
                .map(|c| Letter::new(c).unwrap())
                .collect();
            for word in state.candidates() {
                assert!(state.pattern().is_consistent_with(word, &guessed));
            }

            match outcome {
                GuessOutcome::Missed => assert_eq!(state.guesses_remaining(), budget_before - 1),
                GuessOutcome::Revealed => assert_eq!(state.guesses_remaining(), budget_before),
                GuessOutcome::Finished(_) => panic!("game was not over"),
            }
        }

        assert!(state.is_over());
        assert!(calls <= 26);
        assert_ne!(state.verdict(), Verdict::Undecided);
    }

    #[test]
    fn invariants_hold_alphabetical() {
        let words = [
            "BEAD", "BEAR", "DEAR", "FEAR", "GEAR", "HEAR", "NEAR", "PEAR", "REAR", "SEAR",
            "TEAR", "WEAR", "YEAR", "BOAT", "COAT", "GOAT", "MOAT", "LOOK", "BOOK", "COOK",
        ];
        play_checking_invariants(&words, 4, 26, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn invariants_hold_frequency_order() {
        play_checking_invariants(&FRUIT, 5, 26, "ETAOINSHRDLCUMWFGYPBVKJXQZ");
    }

    #[test]
    fn invariants_hold_with_small_budget() {
        let words = ["ALLY", "BETA", "COOL", "DEAL", "ELSE", "FOOL", "GOAL", "HALL"];
        play_checking_invariants(&words, 4, 3, "LOEATSBCDFGHIJKMNPQRUVWXYZ");
    }
}
