use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod session;

#[derive(Parser)]
#[command(name = "mobroom-cli", version, about = "mobroom mob-programming rotation timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the rotation timer in the foreground
    Run {
        /// Ignore a saved checkpoint and start from idle
        #[arg(long)]
        fresh: bool,
    },
    /// Print the current session state as JSON
    Status,
    /// Team roster management
    Team {
        #[command(subcommand)]
        action: commands::team::TeamAction,
    },
    /// Rotation timing for this session
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Share or import the session as a link
    Link {
        #[command(subcommand)]
        action: commands::link::LinkAction,
    },
    /// Energy/flow statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MOBROOM_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run { fresh } => commands::run::run(fresh),
        Commands::Status => commands::run::status(),
        Commands::Team { action } => commands::team::run(action),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Link { action } => commands::link::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "mobroom-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
