//! Spinner shown while a headless search is in flight

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use jobscout_domain::{JobCategory, SearchResult};
use std::time::Duration;

/// Wraps an indicatif spinner; hidden when `quiet` is set
pub struct SearchSpinner {
    bar: Option<ProgressBar>,
}

impl SearchSpinner {
    pub fn start(category: JobCategory, model: &str, quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_prefix(model.to_string());
        bar.set_message(format!("Searching listings for {}...", category.label()));
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Stop the spinner with a one-line summary of the outcome
    pub fn finish(self, result: &SearchResult) {
        let Some(bar) = self.bar else {
            return;
        };
        let summary = if result.is_fallback {
            format!("{} {} (fallback)", "x".red(), result.label)
        } else {
            format!("{} {}", "v".green(), result.label)
        };
        bar.finish_with_message(summary);
    }
}
