//! Timed log lines end with ` In {secs}s`. The seconds text is cut, not rounded,
//! to a fixed five characters so the suffix width stays stable line to line.
//!
//! Seconds are always written in plain decimal, never exponent notation, so a
//! sub-millisecond span such as `4e-05` renders as `0.000`.

use std::fmt;
use std::time::{Duration, Instant};

/// Characters kept from the seconds text.
pub const ELAPSED_WIDTH: usize = 5;

/// A start/end pair in seconds. Kept as the two raw timestamps so the rendered
/// text depends only on them and is identical however often it is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elapsed {
    start: f64,
    end: f64,
}

impl Elapsed {
    /// Timestamps in seconds, e.g. two readings of a wall clock.
    #[must_use]
    pub const fn between(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Time from `start` until now.
    #[must_use]
    pub fn since(start: Instant) -> Self {
        Self::from(start.elapsed())
    }

    #[must_use]
    pub fn seconds(self) -> f64 {
        self.end - self.start
    }

    /// The seconds text truncated to [`ELAPSED_WIDTH`] characters.
    #[must_use]
    pub fn render(self) -> String {
        let mut text = self.seconds().to_string();
        // Whole numbers print without a fraction; keep the decimal point so `2` reads as `2.0`.
        if text.chars().all(|c| c.is_ascii_digit() || c == '-') {
            text.push_str(".0");
        }
        text.chars().take(ELAPSED_WIDTH).collect()
    }

    /// The full suffix appended to a log line.
    #[must_use]
    pub fn suffix(self) -> String {
        format!(" In {}s", self.render())
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Self::between(0.0, duration.as_secs_f64())
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
