pub mod driver;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use driver::{CyclerDriver, Scheduler};

/// Glyph appended to the displayed text when rendering.
pub const CURSOR: &str = "|";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CyclerError {
    #[error("word list must contain at least one word")]
    EmptyWordList,
}

/// Ordered, non-empty list of words to cycle through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList(Vec<String>);

impl WordList {
    pub fn new<I, S>(words: I) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(Into::into).collect::<Vec<_>>();
        if words.is_empty() {
            return Err(CyclerError::EmptyWordList);
        }
        Ok(Self(words))
    }

    // never empty, so no is_empty counterpart
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

/// Per-phase delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleTiming {
    pub typing_ms: u64,
    pub deleting_ms: u64,
    pub pause_ms: u64,
}

impl Default for CycleTiming {
    fn default() -> Self {
        Self {
            typing_ms: 150,
            deleting_ms: 100,
            pause_ms: 2000,
        }
    }
}

impl CycleTiming {
    pub fn delay(&self, phase: Phase) -> Duration {
        let ms = match phase {
            Phase::Typing => self.typing_ms,
            Phase::Pausing => self.pause_ms,
            Phase::Deleting => self.deleting_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Typewriter state machine: types a word, holds it, deletes it, moves on.
///
/// `shown` is a byte offset into the current word and always sits on a char
/// boundary, so both typing and deleting step one `char` at a time.
#[derive(Debug, Clone)]
pub struct TextCycler {
    words: WordList,
    timing: CycleTiming,
    word_index: usize,
    shown: usize,
    phase: Phase,
}

impl TextCycler {
    pub fn new(words: WordList, timing: CycleTiming) -> Self {
        Self {
            words,
            timing,
            word_index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn from_words<I, S>(words: I, timing: CycleTiming) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(WordList::new(words)?, timing))
    }

    /// Applies a single transition. Returns `true` if the displayed text changed.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            Phase::Typing => {
                let word = self.current_word();
                match word[self.shown..].chars().next() {
                    Some(c) => {
                        self.shown += c.len_utf8();
                        true
                    }
                    None => {
                        self.phase = Phase::Pausing;
                        false
                    }
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                false
            }
            Phase::Deleting => {
                let word = self.current_word();
                match word[..self.shown].chars().next_back() {
                    Some(c) => {
                        self.shown -= c.len_utf8();
                        true
                    }
                    None => {
                        self.word_index = (self.word_index + 1) % self.words.len();
                        self.phase = Phase::Typing;
                        false
                    }
                }
            }
        }
    }

    /// Delay to wait before the next [`tick`](Self::tick).
    pub fn delay(&self) -> Duration {
        self.timing.delay(self.phase)
    }

    pub fn reset(&mut self) {
        self.word_index = 0;
        self.shown = 0;
        self.phase = Phase::Typing;
    }

    pub fn current_word(&self) -> &str {
        // word_index is kept in bounds by the modulo in tick
        self.words.get(self.word_index).unwrap_or_default()
    }

    pub fn displayed_text(&self) -> &str {
        &self.current_word()[..self.shown]
    }

    pub fn render(&self) -> String {
        format!("{}{CURSOR}", self.displayed_text())
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn timing(&self) -> CycleTiming {
        self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler(words: &[&str]) -> TextCycler {
        TextCycler::from_words(words.iter().copied(), CycleTiming::default())
            .expect("word list should not be empty")
    }

    // Ticks until the phase changes, collecting the text after every tick
    fn run_phase(c: &mut TextCycler) -> Vec<String> {
        let phase = c.phase();
        let mut seen = vec![c.displayed_text().to_string()];
        while c.phase() == phase {
            if c.tick() {
                seen.push(c.displayed_text().to_string());
            }
        }
        seen
    }

    #[test]
    fn test_initial_state() {
        let c = cycler(&["Ab", "Cd"]);
        assert_eq!(c.word_index(), 0);
        assert_eq!(c.displayed_text(), "");
        assert_eq!(c.phase(), Phase::Typing);
        assert_eq!(c.render(), "|");
        assert_eq!(c.words().iter().collect::<Vec<_>>(), ["Ab", "Cd"]);
    }

    #[test]
    fn test_empty_word_list_rejected() {
        let res = TextCycler::from_words(Vec::<String>::new(), CycleTiming::default());
        assert_eq!(res.unwrap_err(), CyclerError::EmptyWordList);
        assert!(WordList::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_documented_trace() {
        let mut c = cycler(&["Ab", "Cd"]);
        let mut trace = vec![c.displayed_text().to_string()];
        let mut delays = Vec::new();
        for _ in 0..16 {
            delays.push(c.delay().as_millis());
            if c.tick() {
                trace.push(c.displayed_text().to_string());
            }
        }
        assert_eq!(
            trace,
            vec!["", "A", "Ab", "A", "", "C", "Cd", "C", "", "A", "Ab"]
        );
        // type, type, full -> pause, hold, delete, delete, empty -> advance
        assert_eq!(&delays[..8], &[150, 150, 150, 2000, 100, 100, 100, 150]);
    }

    #[test]
    fn test_typing_and_deleting_walk_prefixes() {
        let words = ["Sagnik!", "সাগ্নিক!", "साग्निक!", "¡Sagnik!"];
        let mut c = cycler(&words);
        for word in words {
            let chars = word.chars().collect::<Vec<_>>();
            let prefixes = (0..=chars.len())
                .map(|n| chars[..n].iter().collect::<String>())
                .collect::<Vec<_>>();

            assert_eq!(c.phase(), Phase::Typing);
            assert_eq!(run_phase(&mut c), prefixes);

            assert_eq!(c.phase(), Phase::Pausing);
            assert_eq!(run_phase(&mut c), vec![word.to_string()]);

            assert_eq!(c.phase(), Phase::Deleting);
            let mut reversed = prefixes.clone();
            reversed.reverse();
            assert_eq!(run_phase(&mut c), reversed);
        }
        assert_eq!(c.word_index(), 0);
    }

    #[test]
    fn test_pause_holds_exactly_one_tick() {
        let mut c = cycler(&["x"]);
        c.tick(); // "x"
        c.tick(); // -> Pausing
        assert_eq!(c.phase(), Phase::Pausing);
        assert_eq!(c.delay(), Duration::from_millis(2000));
        assert!(!c.tick());
        assert_eq!(c.phase(), Phase::Deleting);
        assert_eq!(c.displayed_text(), "x");
    }

    #[test]
    fn test_index_advances_once_per_cycle() {
        let mut c = cycler(&["one", "two", "three"]);
        let mut indices = vec![c.word_index()];
        for _ in 0..200 {
            let before = c.word_index();
            c.tick();
            if c.word_index() != before {
                assert_eq!(c.word_index(), (before + 1) % 3);
                indices.push(c.word_index());
            }
        }
        assert!(indices.len() > 4);
        for pair in indices.windows(2) {
            assert_eq!(pair[1], (pair[0] + 1) % 3);
        }
    }

    #[test]
    fn test_returns_to_start_after_full_rounds() {
        let words = ["Ab", "Cde", "F"];
        let mut c = cycler(&words);
        // one full cycle of a word of n chars: n types, 1 -> pause, 1 hold,
        // n deletes, 1 advance
        let cycle_ticks = |w: &str| 2 * w.chars().count() + 3;
        for _round in 0..3 {
            for w in words {
                for _ in 0..cycle_ticks(w) {
                    c.tick();
                }
            }
            assert_eq!(c.word_index(), 0);
            assert_eq!(c.displayed_text(), "");
            assert_eq!(c.phase(), Phase::Typing);
        }
    }

    #[test]
    fn test_empty_word_in_list() {
        let mut c = cycler(&["", "a"]);
        assert!(!c.tick());
        assert_eq!(c.phase(), Phase::Pausing);
        c.tick();
        assert!(!c.tick());
        assert_eq!(c.word_index(), 1);
    }

    #[test]
    fn test_custom_timing_and_reset() {
        let timing = CycleTiming {
            typing_ms: 10,
            deleting_ms: 5,
            pause_ms: 50,
        };
        let mut c = TextCycler::from_words(["hi"], timing).unwrap();
        assert_eq!(c.delay(), Duration::from_millis(10));
        for _ in 0..4 {
            c.tick();
        }
        assert_eq!(c.phase(), Phase::Deleting);
        assert_eq!(c.delay(), Duration::from_millis(5));
        c.reset();
        assert_eq!(c.displayed_text(), "");
        assert_eq!(c.phase(), Phase::Typing);
    }

    #[test]
    fn test_timing_deserializes_with_defaults() {
        let t: CycleTiming = serde_json::from_str(r#"{"pause_ms": 900}"#).unwrap();
        assert_eq!(t.pause_ms, 900);
        assert_eq!(t.typing_ms, 150);
        assert_eq!(t.deleting_ms, 100);
    }
}
