//! One-shot count-up of the "about" statistics.
//!
//! Runs once per page lifetime, the first time the stats container is at
//! least half visible. All counters share a single repeating tick.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::event::Action;
use crate::schedule::{Pending, Task, TaskHandle, Timers};

/// Leading-integer parse: optional whitespace and sign, then digits. A `0x`
/// or `0X` prefix switches to hexadecimal.
///
/// Trailing garbage is ignored (`"150+"` → 150). `None` if no digits lead.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits = rest.bytes().take_while(|b| char::from(*b).is_digit(radix)).count();
    if digits == 0 {
        return None;
    }
    match i64::from_str_radix(&rest[..digits], radix) {
        Ok(n) => Some(sign * n),
        Err(err) => {
            log::warn!("stats: {raw:?} out of range: {err}");
            None
        }
    }
}

/// Whatever text remains once every run of digits is removed.
#[must_use]
pub fn strip_digits(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// One `.stat-number[data-count]` element.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    pub target: i64,
    pub suffix: String,
    current: f64,
}

impl StatCounter {
    /// Build from the `data-count` attribute and the element's initial text.
    #[must_use]
    pub fn parse(data_count: &str, text: &str) -> Option<Self> {
        let target = parse_leading_int(data_count)?;
        Some(Self { target, suffix: strip_digits(text), current: 0.0 })
    }

    /// Text currently displayed: `floor(current)` followed by the suffix.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn display(&self) -> String {
        format!("{}{}", self.current.floor() as i64, self.suffix)
    }
}

pub struct StatsAnimator {
    counters: Vec<StatCounter>,
    frames: u32,
    tick_ms: u32,
    threshold: f64,
    has_animated: bool,
    frame: u32,
    ticker: Pending,
}

impl StatsAnimator {
    #[must_use]
    pub fn new(counters: Vec<StatCounter>, frames: u32, tick_ms: u32, threshold: f64) -> Self {
        Self {
            counters,
            frames: frames.max(1),
            tick_ms,
            threshold,
            has_animated: false,
            frame: 0,
            ticker: Pending::default(),
        }
    }

    #[must_use]
    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.ticker.is_armed()
    }

    #[must_use]
    pub fn counters(&self) -> &[StatCounter] {
        &self.counters
    }

    /// Start the count-up the first time `ratio` reaches the threshold.
    pub fn visibility_changed(&mut self, ratio: f64, timers: &mut Timers) -> Vec<Action> {
        if self.has_animated || ratio < self.threshold {
            return Vec::new();
        }
        self.has_animated = true;
        if self.counters.is_empty() {
            return Vec::new();
        }
        log::debug!("stats: counting {} values over {} frames", self.counters.len(), self.frames);
        let handle = timers.allocate();
        self.ticker.arm(handle);
        vec![Action::Schedule { handle, task: Task::StatsTick, delay_ms: self.tick_ms, repeat: true }]
    }

    /// Advance one frame. The last frame snaps every counter to its target
    /// and cancels the ticker.
    pub fn tick(&mut self, handle: TaskHandle) -> Vec<Action> {
        if !self.ticker.is(handle) {
            return Vec::new();
        }
        self.frame += 1;
        let done = self.frame >= self.frames;
        let frames = f64::from(self.frames);

        let mut actions = Vec::with_capacity(self.counters.len() + 1);
        for (index, counter) in self.counters.iter_mut().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let target = counter.target as f64;
            counter.current = if done { target } else { counter.current + target / frames };
            actions.push(Action::SetStatText { index, text: counter.display() });
        }
        if done {
            self.ticker.take();
            actions.push(Action::Cancel(handle));
        }
        actions
    }
}
