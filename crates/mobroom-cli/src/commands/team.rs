use clap::Subcommand;

use mobroom_core::{CoreError, Notice, Roster};

use crate::session::{print_notice, CliResult, Session};

#[derive(Subcommand)]
pub enum TeamAction {
    /// Add one or more members
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove a member
    Remove { name: String },
    /// Shuffle the team order
    Shuffle,
    /// Move a member to a new position (1-based)
    Move { name: String, position: usize },
    /// Make a member the current driver
    Driver { name: String },
    /// Hand over to the next driver
    Next,
    /// List members in rotation order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove everyone
    Clear,
}

pub fn run(action: TeamAction) -> CliResult {
    let session = Session::open()?;
    let mut link = session.link()?;
    let roster = &mut link.roster;

    match action {
        TeamAction::Add { names } => {
            let mut added = 0;
            for name in &names {
                match roster.add(name) {
                    Ok(()) => added += 1,
                    Err(e) => print_notice(&Notice::from(&CoreError::from(e))),
                }
            }
            if added == 0 {
                return Err("no members added".into());
            }
        }
        TeamAction::Remove { name } => roster.remove(&name)?,
        TeamAction::Shuffle => roster.shuffle(&mut rand::thread_rng()),
        TeamAction::Move { name, position } => {
            let index = position.checked_sub(1).ok_or("positions start at 1")?;
            roster.move_member(&name, index)?;
        }
        TeamAction::Driver { name } => roster.set_driver(&name)?,
        TeamAction::Next => roster.advance(),
        TeamAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&roster)?);
            } else {
                print_roster(roster);
            }
            return Ok(());
        }
        TeamAction::Clear => roster.clear(),
    }

    session.save_link(&link)?;
    print_roster(&link.roster);
    Ok(())
}

pub fn print_roster(roster: &Roster) {
    if roster.is_empty() {
        println!("No team members yet. Add some with `mobroom-cli team add <name>`.");
        return;
    }
    let current = roster.current_driver_index();
    let next = roster.next_driver_index();
    for (i, name) in roster.members().iter().enumerate() {
        let marker = if Some(i) == current {
            "driver"
        } else if Some(i) == next {
            "next"
        } else {
            ""
        };
        println!("{:>2}. {:<24} {}", i + 1, name, marker);
    }
}
