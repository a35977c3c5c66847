//! Count-up animation for numeric stat labels.
//!
//! Advances by `target / 60` per display frame, so a full run takes about one
//! second at 60 Hz. While running the label shows the floored value; on the
//! final step it shows the original label text exactly (`"50+"` stays `"50+"`).

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Frames a full count-up takes.
pub const COUNTER_FRAMES: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    Running,
    Complete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    target_text: String,
    increment: f64,
    current: f64,
    display: String,
    phase: CounterPhase,
}

impl CounterAnimation {
    /// Start a count-up toward the number at the front of `target_text`.
    ///
    /// Returns `None` when the text does not start with a finite number; such
    /// labels are left alone.
    pub fn new(target_text: &str) -> Option<Self> {
        let target = parse_leading_number(target_text)?;
        if target <= 0.0 {
            // Nothing to count up to.
            return Some(Self {
                target,
                target_text: target_text.to_owned(),
                increment: 0.0,
                current: target,
                display: target_text.to_owned(),
                phase: CounterPhase::Complete,
            });
        }
        Some(Self {
            target,
            target_text: target_text.to_owned(),
            increment: target / COUNTER_FRAMES,
            current: 0.0,
            display: "0".to_owned(),
            phase: CounterPhase::Running,
        })
    }

    /// Advance one frame. Stepping a complete counter does nothing.
    pub fn step(&mut self) -> CounterPhase {
        if self.phase == CounterPhase::Complete {
            return self.phase;
        }
        self.current += self.increment;
        if self.current < self.target {
            self.display = format!("{:.0}", self.current.floor());
        } else {
            self.current = self.target;
            self.display.clone_from(&self.target_text);
            self.phase = CounterPhase::Complete;
        }
        self.phase
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Value currently represented by the label.
    pub fn value(&self) -> f64 {
        match self.phase {
            CounterPhase::Running => self.current.floor(),
            CounterPhase::Complete => self.target,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// `"42"`, `"3.5k"` and `"100+"` yield 42, 3.5 and 100; `"n/a"` yields `None`.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().map_or(None, |n| n.is_finite().then_some(n))
}
