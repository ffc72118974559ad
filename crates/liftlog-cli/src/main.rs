use clap::{Parser, Subcommand};
use liftlog_core::{Config, Database};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "liftlog", version, about = "Workout, diet and notes logger")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log and review workout sets
    Workout {
        #[command(subcommand)]
        action: commands::workout::WorkoutAction,
    },
    /// Exercise catalog
    Exercise {
        #[command(subcommand)]
        action: commands::exercise::ExerciseAction,
    },
    /// Volume and estimated 1RM trend for an exercise
    Trend(commands::trend::TrendArgs),
    /// Diet tracker
    Diet {
        #[command(subcommand)]
        action: commands::diet::DietAction,
    },
    /// Daily body weight
    Weight {
        #[command(subcommand)]
        action: commands::weight::WeightAction,
    },
    /// Notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Log to stderr, filtered by `LIFTLOG_LOG` or else the configured level.
fn init_tracing(config: Option<&Config>) {
    let level = config.map_or("warn", |c| c.logging.level.as_str());
    let filter = EnvFilter::try_from_env("LIFTLOG_LOG")
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = Config::load();
    init_tracing(loaded.as_ref().ok());

    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(e) => {
            tracing::warn!(error = %e, "using default configuration");
            Config::default()
        }
    };
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        // Gets the load error itself so a broken file is never overwritten.
        Commands::Config { action } => commands::config::run(action, loaded),
        Commands::Workout { action } => commands::workout::run(action, &Database::open()?),
        Commands::Exercise { action } => commands::exercise::run(action, &Database::open()?),
        Commands::Trend(args) => commands::trend::run(args, &Database::open()?, &config),
        Commands::Diet { action } => commands::diet::run(action, &Database::open()?, &config),
        Commands::Weight { action } => commands::weight::run(action, &Database::open()?),
        Commands::Note { action } => commands::note::run(action, &Database::open()?),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
