use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "capable", version, about = "Capable CLI -- Eisenhower matrix day planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Carry yesterday's unfinished tasks into today
    Rollover {
        #[command(subcommand)]
        action: commands::rollover::RolloverAction,
    },
    /// Daily completion streak
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// View mode and sound preferences
    View {
        #[command(subcommand)]
        action: commands::view::ViewAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Rollover { action } => commands::rollover::run(action),
        Commands::Streak { action } => commands::streak::run(action),
        Commands::View { action } => commands::view::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
