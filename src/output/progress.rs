//! Progress reporting.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Bounded, monotonically increasing counter rendered as a progress bar.
///
/// A hidden reporter still counts, which is what tests and `--quiet` use.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a visible item-count bar labelled with `message`.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message(message.to_string());
        Self { bar }
    }

    /// Create a reporter that counts without drawing anything.
    pub fn hidden() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_draw_target(ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Set the upper bound once it is known.
    pub fn set_total(&self, total: u64) {
        self.bar.set_length(total);
    }

    /// Advance by `delta` units.
    pub fn advance(&self, delta: u64) {
        self.bar.inc(delta);
    }

    /// Units reported so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Upper bound, if set.
    pub fn total(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Leave the final state on screen.
    pub fn finish(&self) {
        self.bar.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_reporter_counts() {
        let progress = ProgressReporter::hidden();
        progress.set_total(6);
        progress.advance(1);
        progress.advance(2);
        assert_eq!(progress.position(), 3);
        assert_eq!(progress.total(), Some(6));
    }

    #[test]
    fn test_visible_reporter_tracks_position() {
        let progress = ProgressReporter::new("coubs");
        progress.set_total(2);
        progress.advance(2);
        progress.finish();
        assert_eq!(progress.position(), 2);
    }
}
