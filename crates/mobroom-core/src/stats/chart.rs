//! Text rendering of the stat log as a time series.

use chrono::Local;

use super::sample::{Level, StatSample};
use super::store::StatAverage;

const BAR_WIDTH: usize = 20;

fn bar(level: Level) -> String {
    let filled = (level.value() * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// One row per sample, oldest first: local time, energy bar, flow bar.
pub fn render_timeline(samples: &[StatSample], average: Option<StatAverage>) -> String {
    let mut output = String::from("\nStats Timeline\n");
    output.push_str(&"─".repeat(72));
    output.push('\n');

    if samples.is_empty() {
        output.push_str("No stats recorded yet\n");
        return output;
    }

    output.push_str(&format!(
        "{:<16} {:<width$}      {:<width$}\n",
        "",
        "Energy",
        "Flow",
        width = BAR_WIDTH
    ));
    for sample in samples {
        output.push_str(&format!(
            "{} {} {:>4} {} {:>4}\n",
            sample.timestamp.with_timezone(&Local).format("%m-%d %H:%M:%S"),
            bar(sample.energy),
            sample.energy.to_string(),
            bar(sample.flow),
            sample.flow.to_string(),
        ));
    }

    output.push_str(&"─".repeat(72));
    output.push('\n');
    output.push_str(&format!("{} data points", samples.len()));
    if let Some(avg) = average {
        output.push_str(&format!(
            "  avg energy {:.0}%  avg flow {:.0}%",
            avg.energy * 100.0,
            avg.flow * 100.0
        ));
    }
    output.push('\n');
    output
}
