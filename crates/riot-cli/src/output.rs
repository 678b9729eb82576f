// Rust guideline compliant 2026-02-06

//! Output formatting for the Riot CLI.
//!
//! Reports can be rendered as JSON envelopes, human-readable tables or plain text.

use riot_app::{AppError, BatchReport, ErrorCode, ErrorEnvelope, RunReport, SuccessEnvelope};
use riot_core::CityMap;
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

use crate::terminal::paint;

/// Maximum number of timeline rows shown in table output.
const TIMELINE_ROWS: usize = 10;

/// Output formatter trait.
///
/// Defines how command results are rendered in each output format.
pub trait OutputFormatter {
    /// Formats the report of a single run.
    fn format_run(&self, report: &RunReport) -> String;

    /// Formats the report of a batch of runs.
    fn format_batch(&self, report: &BatchReport) -> String;

    /// Formats a city map.
    fn format_map(&self, map: &CityMap) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// Builds the error envelope for any error reaching the command layer.
pub fn error_envelope(error: &anyhow::Error) -> ErrorEnvelope {
    match error.downcast_ref::<AppError>() {
        Some(app_error) => ErrorEnvelope::from_error(app_error),
        None => ErrorEnvelope {
            status: "error",
            code: ErrorCode::InvalidInput,
            message: format!("{:#}", error),
            details: None,
        },
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
}

/// JSON output formatter.
///
/// Wraps results in success envelopes for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_run(&self, report: &RunReport) -> String {
        to_pretty_json(&SuccessEnvelope::new(report))
    }

    fn format_batch(&self, report: &BatchReport) -> String {
        to_pretty_json(&SuccessEnvelope::new(report))
    }

    fn format_map(&self, map: &CityMap) -> String {
        let rows: Vec<String> = map.render().lines().map(str::to_string).collect();
        to_pretty_json(&SuccessEnvelope::new(json!({
            "width": map.width(),
            "height": map.height(),
            "streets": map.n_streets(),
            "exit_space_height": map.exit_space_height(),
            "walkable": map.walkable_count(),
            "rows": rows,
        })))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        to_pretty_json(&error_envelope(error))
    }
}

/// Evenly spaced indices into a series of `len` items, always including the last one.
fn timeline_indices(len: usize, rows: usize) -> Vec<usize> {
    if len <= rows {
        return (0..len).collect();
    }
    let stride = len.div_ceil(rows);
    let mut indices: Vec<usize> = (0..len).step_by(stride).collect();
    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }
    indices
}

/// Table output formatter.
///
/// Formats reports as aligned tables, colouring rioters and injuries.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn highlight(&self, value: u32, color: Color) -> String {
        let text = value.to_string();
        if value == 0 {
            return text;
        }
        paint(&text, color, true, self.use_color)
    }
}

impl OutputFormatter for TableFormatter {
    fn format_run(&self, report: &RunReport) -> String {
        let summary = &report.summary;
        let mut output = String::new();

        output.push_str(&format!("Seed:        {}\n", report.seed));
        output.push_str(&format!(
            "Grid:        {}x{} ({} streets)\n",
            report.width, report.height, report.streets
        ));
        output.push_str(&format!("Steps:       {}\n", report.steps));
        output.push_str(&format!(
            "Entered:     {} home, {} away\n",
            summary.entered_home, summary.entered_away
        ));
        output.push_str(&format!(
            "Left:        {} home, {} away\n",
            summary.left_home, summary.left_away
        ));
        output.push_str(&format!(
            "On map:      {} home, {} away\n",
            summary.final_teams.home, summary.final_teams.away
        ));
        output.push_str(&format!(
            "Rioters:     {} (peak {} at step {})\n",
            self.highlight(summary.final_states.rioters, Color::Yellow),
            summary.peak_rioters,
            summary.peak_rioters_step
        ));
        output.push_str(&format!(
            "Injured:     {}\n",
            self.highlight(summary.final_states.injured, Color::Red)
        ));

        if report.agent_states.is_empty() {
            return output;
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Step", "Bystanders", "Rioters", "Injured", "Home", "Away"]);
        for idx in timeline_indices(report.agent_states.len(), TIMELINE_ROWS) {
            let states = &report.agent_states[idx];
            let teams = report.team_control.get(idx).copied().unwrap_or_default();
            builder.push_record(vec![
                (idx + 1).to_string(),
                states.bystanders.to_string(),
                states.rioters.to_string(),
                states.injured.to_string(),
                teams.home.to_string(),
                teams.away.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        output.push('\n');
        output.push_str(&table.to_string());
        output
    }

    fn format_batch(&self, report: &BatchReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Seed", "Left", "Rioters", "Peak", "Injured"]);
        for run in &report.runs {
            builder.push_record(vec![
                run.seed.to_string(),
                run.summary.total_left().to_string(),
                run.summary.final_states.rioters.to_string(),
                run.summary.peak_rioters.to_string(),
                self.highlight(run.summary.final_states.injured, Color::Red),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        format!(
            "{}\nRuns: {}, steps per run: {}\nMean left: {:.2}, mean rioters: {:.2}, \
             mean peak: {:.2}, mean injured: {:.2}",
            table,
            report.runs.len(),
            report.steps,
            report.mean_left,
            report.mean_rioters,
            report.mean_peak_rioters,
            report.mean_injured
        )
    }

    fn format_map(&self, map: &CityMap) -> String {
        format!(
            "City map {}x{}, {} streets, {} walkable cells\n\n{}",
            map.width(),
            map.height(),
            map.n_streets(),
            map.walkable_count(),
            map.render().trim_end()
        )
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!(
            "{} {:#}",
            paint("Error:", Color::Red, true, self.use_color),
            error
        )
    }
}

/// Plain text output formatter.
///
/// One whitespace-separated record per line, without colours or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_run(&self, report: &RunReport) -> String {
        let summary = &report.summary;
        let mut output = format!(
            "seed {}\nsteps {}\nentered {} {}\nleft {} {}\n",
            report.seed,
            report.steps,
            summary.entered_home,
            summary.entered_away,
            summary.left_home,
            summary.left_away
        );
        for (idx, states) in report.agent_states.iter().enumerate() {
            let teams = report.team_control.get(idx).copied().unwrap_or_default();
            output.push_str(&format!(
                "{} {} {} {} {} {}\n",
                idx + 1,
                states.bystanders,
                states.rioters,
                states.injured,
                teams.home,
                teams.away
            ));
        }
        output
    }

    fn format_batch(&self, report: &BatchReport) -> String {
        let mut output = String::new();
        for run in &report.runs {
            output.push_str(&format!(
                "{} {} {} {} {}\n",
                run.seed,
                run.summary.total_left(),
                run.summary.final_states.rioters,
                run.summary.peak_rioters,
                run.summary.final_states.injured
            ));
        }
        output
    }

    fn format_map(&self, map: &CityMap) -> String {
        map.render().trim_end().to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {:#}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_keeps_short_series() {
        assert_eq!(timeline_indices(3, 10), vec![0, 1, 2]);
    }

    #[test]
    fn test_timeline_samples_long_series() {
        let indices = timeline_indices(100, 10);
        assert_eq!(indices.first(), Some(&0));
        assert_eq!(indices.last(), Some(&99));
        assert!(indices.len() <= 11);
    }
}
