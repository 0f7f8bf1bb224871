use clap::Subcommand;

use mobroom_core::SessionLink;

use crate::commands::team::print_roster;
use crate::session::{CliResult, Session};

#[derive(Subcommand)]
pub enum LinkAction {
    /// Print the session as a query string
    Show {
        /// Prefix with a base URL, e.g. https://mob.example.com/
        #[arg(long)]
        base: Option<String>,
    },
    /// Replace the session with the one in a link or query string
    Import { link: String },
}

pub fn run(action: LinkAction) -> CliResult {
    let session = Session::open()?;

    match action {
        LinkAction::Show { base } => {
            let query = session.link()?.to_query();
            match base {
                Some(base) => println!("{}?{}", base.trim_end_matches('?'), query),
                None => println!("?{query}"),
            }
        }
        LinkAction::Import { link } => {
            let imported = SessionLink::parse(&link, session.config.settings()?);
            session.save_link(&imported)?;
            // The old checkpoint belongs to a different session.
            session.files.clear_checkpoint()?;
            print_roster(&imported.roster);
        }
    }
    Ok(())
}
