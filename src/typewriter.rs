// Typewriter animator - the hero banner's rotating word effect
//
// Types and deletes words from a fixed list one character at a time, looping
// forever. The session is a small explicit state machine; each `tick()`
// advances one character and reports how long the caller should wait before
// the next tick. The caller re-arms a one-shot timer with that delay, so the
// animation is a self-rescheduling callback chain rather than a busy loop.

use std::time::Duration;

/// Delay between characters while typing forward
pub const TYPE_DELAY: Duration = Duration::from_millis(80);

/// Delay between characters while deleting (faster than typing)
pub const DELETE_DELAY: Duration = Duration::from_millis(40);

/// Pause with the full word visible before deletion starts
pub const HOLD_FULL: Duration = Duration::from_millis(900);

/// Pause on the empty display before the next word starts typing
pub const HOLD_EMPTY: Duration = Duration::from_millis(300);

/// Delay before the very first tick, so the surrounding content is readable
pub const STARTUP_DELAY: Duration = Duration::from_millis(600);

/// The words the hero banner cycles through
pub const DEFAULT_WORDS: [&str; 3] = ["ANIME", "MANGA", "CHARACTERS"];

/// Which direction the animation is currently moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// One animation step: the text to display and the delay until the next tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub delay: Duration,
}

/// In-memory session state for the typewriter animation
///
/// Invariants: `char_index` stays within `[0, current word length]` and
/// `word_index` wraps modulo the word count. The session never terminates;
/// it resets to the initial state on every construction.
pub struct Typewriter {
    words: Vec<String>,
    word_index: usize,
    char_index: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            word_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        }
    }

    /// Session over the standard hero word list
    pub fn standard() -> Self {
        Self::new(DEFAULT_WORDS.iter().map(|w| w.to_string()).collect())
    }

    /// The currently displayed prefix of the current word
    pub fn current_text(&self) -> String {
        match self.words.get(self.word_index) {
            Some(word) => word.chars().take(self.char_index).collect(),
            None => String::new(),
        }
    }

    /// Advance the animation by one character
    ///
    /// Typing: grow the prefix; on reaching the full word, switch to deleting
    /// and hold the full word on screen. Deleting: shrink the prefix; on
    /// reaching empty, advance to the next word (wrapping) and hold briefly
    /// before typing resumes.
    pub fn tick(&mut self) -> Tick {
        // Empty word list: keep ticking harmlessly instead of erroring,
        // mirroring the missing-display-target guard
        let Some(word) = self.words.get(self.word_index) else {
            return Tick {
                text: String::new(),
                delay: HOLD_EMPTY,
            };
        };
        let word_len = word.chars().count();

        let delay = match self.phase {
            Phase::Typing => {
                self.char_index += 1;
                if self.char_index >= word_len {
                    self.char_index = word_len;
                    self.phase = Phase::Deleting;
                    HOLD_FULL
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = Phase::Typing;
                    self.word_index = (self.word_index + 1) % self.words.len();
                    HOLD_EMPTY
                } else {
                    DELETE_DELAY
                }
            }
        };

        Tick {
            text: self.current_text(),
            delay,
        }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_full_word_then_holds() {
        let mut tw = Typewriter::new(vec!["ABC".to_string()]);

        assert_eq!(tw.tick(), tick("A", TYPE_DELAY));
        assert_eq!(tw.tick(), tick("AB", TYPE_DELAY));
        // Full word reached: long hold before deletion
        assert_eq!(tw.tick(), tick("ABC", HOLD_FULL));
    }

    #[test]
    fn test_deletes_faster_and_holds_on_empty() {
        let mut tw = Typewriter::new(vec!["ABC".to_string()]);
        for _ in 0..3 {
            tw.tick();
        }

        assert_eq!(tw.tick(), tick("AB", DELETE_DELAY));
        assert_eq!(tw.tick(), tick("A", DELETE_DELAY));
        // Back to empty: short hold before the next word types
        assert_eq!(tw.tick(), tick("", HOLD_EMPTY));
    }

    #[test]
    fn test_full_cycle_over_word_list() {
        let mut tw = Typewriter::standard();
        let mut seen = Vec::new();

        // Two full passes over the list; the animation must wrap and the
        // prefix must never exceed the word or go below empty
        for _ in 0..2 {
            for word in DEFAULT_WORDS {
                let len = word.chars().count();
                for i in 1..=len {
                    let t = tw.tick();
                    assert_eq!(t.text, word[..i].to_string());
                    assert!(t.text.len() <= word.len());
                }
                for i in (0..len).rev() {
                    let t = tw.tick();
                    assert_eq!(t.text, word[..i].to_string());
                }
                seen.push(word);
            }
        }

        assert_eq!(seen.len(), DEFAULT_WORDS.len() * 2);
    }

    #[test]
    fn test_word_index_wraps_modulo_length() {
        let mut tw = Typewriter::new(vec!["HI".to_string(), "YO".to_string()]);

        // Drain one full type+delete cycle per word, twice around
        for _ in 0..4 {
            loop {
                if tw.tick().delay == HOLD_EMPTY {
                    break;
                }
            }
        }

        // Next typed character must come from the first word again
        assert_eq!(tw.tick().text, "H");
    }

    #[test]
    fn test_empty_word_list_is_a_noop() {
        let mut tw = Typewriter::new(Vec::new());

        for _ in 0..10 {
            let t = tw.tick();
            assert_eq!(t.text, "");
            assert_eq!(t.delay, HOLD_EMPTY);
        }
    }

    #[test]
    fn test_delay_constants_are_distinct() {
        // The asymmetric pacing is deliberate; all four delays differ
        let delays = [TYPE_DELAY, DELETE_DELAY, HOLD_FULL, HOLD_EMPTY];
        for (i, a) in delays.iter().enumerate() {
            for b in delays.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    fn tick(text: &str, delay: Duration) -> Tick {
        Tick {
            text: text.to_string(),
            delay,
        }
    }
}
