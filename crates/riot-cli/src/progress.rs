// Rust guideline compliant 2026-02-06

//! Progress reporting for long simulations.

/// Step counter that prints periodic updates to stderr.
pub struct ProgressReporter {
    label: String,
    total: usize,
    interval: usize,
    enabled: bool,
}

impl ProgressReporter {
    /// Creates a new progress reporter.
    ///
    /// # Arguments
    ///
    /// * `label` - Label to include in progress messages
    /// * `total` - Number of steps the operation will take
    /// * `enabled` - Whether anything is printed at all
    pub fn new(label: &str, total: usize, enabled: bool) -> Self {
        Self {
            label: label.to_string(),
            total,
            interval: (total / 10).max(1),
            enabled,
        }
    }

    /// Returns true if `current` is a step that should be reported.
    pub fn should_report(&self, current: usize) -> bool {
        self.enabled && current > 0 && current % self.interval == 0
    }

    /// Formats the progress line for `current`.
    pub fn message(&self, current: usize) -> String {
        let percent = if self.total == 0 {
            100
        } else {
            current * 100 / self.total
        };
        format!("{}: step {} / {} ({}%)", self.label, current, self.total, percent)
    }

    /// Reports progress at the configured interval.
    pub fn report(&self, current: usize) {
        if self.should_report(current) {
            eprintln!("{}", self.message(current));
        }
    }

    /// Reports completion for the operation.
    pub fn finish(&self) {
        if self.enabled {
            eprintln!("{}: {} steps complete", self.label, self.total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_every_tenth() {
        let progress = ProgressReporter::new("run", 100, true);
        assert!(progress.should_report(10));
        assert!(!progress.should_report(11));
        assert!(progress.should_report(100));
    }

    #[test]
    fn test_short_runs_report_each_step() {
        let progress = ProgressReporter::new("run", 5, true);
        assert!((1..=5).all(|step| progress.should_report(step)));
    }

    #[test]
    fn test_disabled_reporter_is_silent() {
        let progress = ProgressReporter::new("run", 100, false);
        assert!(!progress.should_report(10));
    }

    #[test]
    fn test_message_includes_percentage() {
        let progress = ProgressReporter::new("run", 200, true);
        assert_eq!(progress.message(50), "run: step 50 / 200 (25%)");
    }
}
