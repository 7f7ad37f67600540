mod commands;
mod output;

use bhujal_core::model::PlaceType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bhujal",
    version,
    about = "Groundwater level extraction from district monitoring reports"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract depth records from a report PDF (without storing them)
    Extract {
        /// Path to the report PDF
        input_file: PathBuf,

        /// Custom TOML extraction config
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Predefined extraction config (used when --config is not given)
        #[arg(short, long, default_value = "karnal")]
        preset: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Extract report PDF(s) and replace the stored readings for the district
    Import {
        /// Path(s) to report PDFs, processed in order
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// JSON store file (created if missing)
        #[arg(short, long, value_name = "FILE")]
        store: PathBuf,

        /// Custom TOML extraction config
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Predefined extraction config (used when --config is not given)
        #[arg(short, long, default_value = "karnal")]
        preset: String,
    },
    /// List stored places of a district
    Places {
        /// JSON store file
        #[arg(short, long, value_name = "FILE")]
        store: PathBuf,

        #[arg(short, long, default_value = "Karnal")]
        district: String,

        /// Only places of this type: village or town
        #[arg(short = 't', long = "type", value_parser = parse_place_type)]
        place_type: Option<PlaceType>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show the stored readings of one place, newest first
    Readings {
        /// JSON store file
        #[arg(short, long, value_name = "FILE")]
        store: PathBuf,

        /// Place id (see `bhujal places`)
        #[arg(long)]
        place: u64,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect extraction configs
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// List predefined extraction configs
    List,
    /// Print a predefined config as TOML
    Show {
        /// Preset name (e.g., "karnal")
        #[arg(default_value = "karnal")]
        preset: String,
    },
    /// Validate a custom config file
    Validate {
        /// Path to TOML config file
        file: PathBuf,
    },
}

fn parse_place_type(s: &str) -> Result<PlaceType, String> {
    PlaceType::from_str_loose(s)
        .ok_or_else(|| format!("unknown place type '{s}' (expected village or town)"))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input_file,
            config,
            preset,
            output,
        } => commands::extract::run(input_file, config, &preset, &output),
        Commands::Import {
            input_files,
            store,
            config,
            preset,
        } => commands::import::run(input_files, store, config, &preset),
        Commands::Places {
            store,
            district,
            place_type,
            output,
        } => commands::store::places(store, &district, place_type, &output),
        Commands::Readings {
            store,
            place,
            output,
        } => commands::store::readings(store, place, &output),
        Commands::Config { action } => match action {
            ConfigAction::List => commands::config::list(),
            ConfigAction::Show { preset } => commands::config::show(&preset),
            ConfigAction::Validate { file } => commands::config::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
