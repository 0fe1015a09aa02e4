//! Progress indicator for description enrichment.
//!
//! Responsibilities:
//! - Show which dashboard is being fetched while search results are enriched.
//! - Ensure ALL progress output is written to STDERR (never stdout), so the JSON
//!   result is not contaminated.
//!
//! Non-responsibilities:
//! - This module does not decide *when* progress should be shown; callers do.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// A counting progress bar over the dashboards being enriched.
///
/// When disabled, it becomes a no-op.
pub(crate) struct DescriptionProgress {
    pb: Option<ProgressBar>,
}

impl DescriptionProgress {
    /// Create a new progress indicator.
    ///
    /// The total is unknown until the first update, so the bar starts empty.
    pub(crate) fn new(enabled: bool) -> Self {
        if !enabled {
            return Self { pb: None };
        }

        let pb = ProgressBar::new(0);
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("[{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
                .expect("template is a compile-time constant with valid syntax")
                .progress_chars("=>-"),
        );

        Self { pb: Some(pb) }
    }

    /// Record that the dashboard at `position` (1-based) of `total` is being fetched.
    pub(crate) fn update(&self, position: usize, total: usize, title: &str) {
        let Some(pb) = &self.pb else {
            return;
        };

        pb.set_length(total as u64);
        pb.set_position(position.saturating_sub(1) as u64);
        pb.set_message(title.to_string());
    }

    /// Finish the progress bar and remove it from the terminal.
    pub(crate) fn finish(&self) {
        if let Some(pb) = &self.pb {
            pb.finish_and_clear();
        }
    }
}

impl Drop for DescriptionProgress {
    fn drop(&mut self) {
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
