//! CLI frontend for the Dunjia divination engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dj",
    about = "Dunjia — a Qimen Dunjia divination engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and display the chart for a moment in time
    Chart {
        /// Timestamp (e.g. 2024-02-10T12:00); defaults to now
        #[arg(short, long)]
        at: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Analyze a symbol in its owning palace
    Analyze {
        /// Symbol name: a stem, star, door, deity, day-stem, or hour-stem
        symbol: String,

        /// Timestamp (e.g. 2024-02-10T12:00); defaults to now
        #[arg(short, long)]
        at: Option<String>,

        /// Industry context (e.g. finance, technology)
        #[arg(short, long)]
        industry: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank the best times and directions for an affair
    Auspicious {
        /// Affair key (e.g. investment, contract; see `dj affairs`)
        affair: String,

        /// Search range: today, 3days, week, or YYYY-MM-DD
        #[arg(short, long, default_value = "today")]
        range: String,

        /// Industry context (e.g. finance, technology)
        #[arg(short, long)]
        industry: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Parse a free-text question and answer it
    Ask {
        /// The question, e.g. "明天下午3点签合同"
        text: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the affair catalog
    Affairs,

    /// List the industry catalog
    Industries,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chart { at, json } => commands::chart::run(at.as_deref(), json),
        Commands::Analyze {
            symbol,
            at,
            industry,
            json,
        } => commands::analyze::run(&symbol, at.as_deref(), industry.as_deref(), json),
        Commands::Auspicious {
            affair,
            range,
            industry,
            json,
        } => commands::auspicious::run(&affair, &range, industry.as_deref(), json),
        Commands::Ask { text, json } => commands::ask::run(&text, json),
        Commands::Affairs => commands::catalogs::affairs(),
        Commands::Industries => commands::catalogs::industries(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
