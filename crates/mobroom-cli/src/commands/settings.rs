use clap::Subcommand;

use crate::session::{CliResult, Session};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show the session's rotation settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change rotation settings for this session
    Set {
        /// Rotation length in minutes
        #[arg(long)]
        time: Option<u32>,
        /// Rotations between breaks
        #[arg(long)]
        breaks: Option<u32>,
        /// Break length in minutes
        #[arg(long = "break-length")]
        break_length: Option<u32>,
    },
}

pub fn run(action: SettingsAction) -> CliResult {
    let session = Session::open()?;
    let mut link = session.link()?;

    match action {
        SettingsAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&link.settings)?);
            } else {
                let s = link.settings;
                println!("Rotation:     {} min", s.rotation_minutes());
                println!("Break every:  {} rotations", s.breaks_every());
                println!("Break length: {} min", s.break_minutes());
            }
        }
        SettingsAction::Set {
            time,
            breaks,
            break_length,
        } => {
            let mut settings = link.settings;
            if let Some(minutes) = time {
                settings = settings.with_rotation_minutes(minutes)?;
            }
            if let Some(rotations) = breaks {
                settings = settings.with_breaks_every(rotations)?;
            }
            if let Some(minutes) = break_length {
                settings = settings.with_break_minutes(minutes)?;
            }
            link.settings = settings;
            session.save_link(&link)?;
            println!("Settings updated.");
        }
    }
    Ok(())
}
