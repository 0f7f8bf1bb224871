use clap::Subcommand;

use mobroom_core::Config;

use crate::session::{CliResult, Session};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get { key: String },
    /// Set a config value
    Set { key: String, value: String },
    /// Show all config as TOML
    Show,
    /// Restore the default config
    Reset,
}

pub fn run(action: ConfigAction) -> CliResult {
    let mut session = Session::open()?;

    match action {
        ConfigAction::Get { key } => match session.config.get(&key) {
            Some(value) => println!("{value}"),
            None => return Err(format!("unknown config key: {key}").into()),
        },
        ConfigAction::Set { key, value } => {
            session.config.set(&key, &value)?;
            session.config.save_to(&session.dir)?;
            println!("{key} = {value}");
        }
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(&session.config)?);
        }
        ConfigAction::Reset => {
            session.config = Config::default();
            session.config.save_to(&session.dir)?;
            println!("Config reset to defaults.");
        }
    }
    Ok(())
}
