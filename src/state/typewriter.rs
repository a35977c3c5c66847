//! Character-by-character reveal of the hero tagline.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Delay before the first character, leaving room for the loading screen.
pub const TYPE_START_DELAY_MS: f64 = 1_500.0;

/// Delay between characters.
pub const TYPE_CHAR_MS: f64 = 150.0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), shown: 0 }
    }

    /// Reveal one more character. Returns `true` while characters remain.
    pub fn advance(&mut self) -> bool {
        if self.shown < self.chars.len() {
            self.shown += 1;
        }
        !self.is_done()
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn full_text(&self) -> String {
        self.chars.iter().collect()
    }
}
