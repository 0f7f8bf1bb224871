use clap::Subcommand;

use mobroom_core::stats::chart;
use mobroom_core::Reading;

use crate::session::{print_notice, CliResult, Session};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Record a reading outside of a running timer
    Record {
        /// Energy, 0.0 (low) to 1.0 (high)
        #[arg(required_unless_present = "at")]
        energy: Option<f64>,
        /// Flow, 0.0 (low) to 1.0 (high)
        #[arg(required_unless_present = "at")]
        flow: Option<f64>,
        /// Point `x,y` picked on the stats surface instead of typed values:
        /// flow runs left to right, energy top to bottom
        #[arg(long, value_parser = parse_pair, conflicts_with_all = ["energy", "flow"])]
        at: Option<(f64, f64)>,
        /// Size `width,height` of the surface `--at` refers to
        #[arg(long, value_parser = parse_pair, default_value = "100,100")]
        surface: (f64, f64),
    },
    /// Show averages
    Show {
        /// Output the full log as JSON
        #[arg(long)]
        json: bool,
    },
    /// Draw the stats timeline
    Chart,
    /// Delete all recorded stats
    Clear {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: StatsAction) -> CliResult {
    let session = Session::open()?;
    let mut store = session.stats();

    match action {
        StatsAction::Record {
            energy,
            flow,
            at,
            surface: (width, height),
        } => {
            let reading = match (at, energy, flow) {
                (Some((x, y)), _, _) => Reading::from_surface_point(x, y, width, height)?,
                (None, Some(energy), Some(flow)) => Reading::new(energy, flow)?,
                _ => return Err("give <energy> <flow> or --at x,y".into()),
            };
            if let Some(notice) = store.record(reading) {
                print_notice(&notice);
            }
            println!("Recorded energy {} flow {}", reading.energy, reading.flow);
        }
        StatsAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.samples())?);
                return Ok(());
            }
            match store.average() {
                Some(avg) => {
                    println!("Samples:        {}", avg.count);
                    println!("Average energy: {:.0}%", avg.energy * 100.0);
                    println!("Average flow:   {:.0}%", avg.flow * 100.0);
                }
                None => println!("No stats recorded yet"),
            }
        }
        StatsAction::Chart => {
            print!("{}", chart::render_timeline(store.samples(), store.average()));
        }
        StatsAction::Clear { yes } => {
            if !yes {
                return Err("clear all stats? re-run with --yes to confirm".into());
            }
            if let Some(notice) = store.clear() {
                print_notice(&notice);
            }
            println!("Stats cleared.");
        }
    }
    Ok(())
}

fn parse_pair(value: &str) -> Result<(f64, f64), String> {
    let (a, b) = value
        .split_once(',')
        .ok_or_else(|| format!("expected two numbers like 40,60, got '{value}'"))?;
    let number = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|e| format!("'{}': {e}", s.trim()))
    };
    Ok((number(a)?, number(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_pairs() {
        assert_eq!(parse_pair("40,60"), Ok((40.0, 60.0)));
        assert_eq!(parse_pair(" 1.5 , 2 "), Ok((1.5, 2.0)));
        assert!(parse_pair("40").is_err());
        assert!(parse_pair("a,1").is_err());
    }
}
