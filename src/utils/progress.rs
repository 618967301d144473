//! Progress reporting for long single-pass runs.

use super::config::PROGRESS_INTERVAL;
use log::info;
use num_format::{Locale, ToFormattedString};
use std::time::Instant;

/// Logs a progress line every `PROGRESS_INTERVAL` items.
#[derive(Debug)]
pub struct Progress {
    verb: &'static str,
    interval: u64,
    start: Instant,
}

impl Progress {
    pub fn new(verb: &'static str) -> Self {
        Self::with_interval(verb, PROGRESS_INTERVAL)
    }

    pub fn with_interval(verb: &'static str, interval: u64) -> Self {
        Self {
            verb,
            interval: interval.max(1),
            start: Instant::now(),
        }
    }

    /// Record that `done` items have been handled so far.
    ///
    /// Returns true when a progress line was emitted.
    pub fn tick(&self, done: u64) -> bool {
        if done == 0 || done % self.interval != 0 {
            return false;
        }

        info!(
            "{} {} measurements in {:.2?}",
            self.verb,
            done.to_formatted_string(&Locale::en),
            self.start.elapsed()
        );
        true
    }

    /// Time since the run started, in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_only_on_interval() {
        let progress = Progress::with_interval("Read", 3);
        assert!(!progress.tick(0));
        assert!(!progress.tick(1));
        assert!(!progress.tick(2));
        assert!(progress.tick(3));
        assert!(progress.tick(6));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let progress = Progress::with_interval("Wrote", 0);
        assert!(progress.tick(1));
    }
}
