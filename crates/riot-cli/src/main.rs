// Rust guideline compliant 2026-02-06

//! Riot CLI Application
//!
//! Command-line interface for the football riot agent-based model.

use anyhow::Result;
use clap::Parser;
use riot_app::AppError;
use riot_core::{Config, CONFIG_FILE_NAME};
use riot_cli::commands::{self, run::SimulationArgs};
use riot_cli::{create_formatter, logging, should_use_color, OutputFormatter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "riot",
    version,
    about = "Riot: agent-based model of rival fans leaving a stadium",
    long_about = "Riot simulates home and away fans entering a city grid from a stadium. \
                  Fans switch between bystanders and rioters, may get injured, and \
                  bystanders leave the map at the bottom row.",
    after_help = "Examples:\n  riot init\n  riot run --steps 200 --seed 7\n  \
                  riot run --streets 4 --street-width 3 --format json --output report.json\n  \
                  riot batch --runs 8 --steps 100\n  riot map --streets 4\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write JSON log lines to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Run one simulation
    Run {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Also write the JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Do not print progress to stderr
        #[arg(long)]
        no_progress: bool,
    },

    /// Run several seeded simulations in parallel
    Batch {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Number of runs
        #[arg(long, default_value_t = 4)]
        runs: usize,
    },

    /// Print the city map
    Map {
        #[command(flatten)]
        sim: SimulationArgs,
    },

    /// Show the package version
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match logging::init_tracing(&cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    // Config errors are reported in the requested format where possible.
    let loaded = Config::load(&config_path).map_err(AppError::from);
    let config_format = loaded
        .as_ref()
        .map(|config| config.output_format)
        .unwrap_or_default();

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None if cli.json => "json",
        None => match config_format {
            riot_core::OutputFormat::Json => "json",
            riot_core::OutputFormat::Table => "table",
            riot_core::OutputFormat::Plain => "plain",
        },
    };
    let formatter = create_formatter(format, use_color);

    let result = dispatch(cli.command, &config_path, loaded, formatter.as_ref());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %format!("{:#}", err), "command failed");
            if format == "json" {
                println!("{}", formatter.format_error(&err));
            } else {
                eprintln!("{}", formatter.format_error(&err));
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(
    command: Option<Commands>,
    config_path: &Path,
    loaded: std::result::Result<Config, AppError>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    match command {
        // init must work even when the existing file is broken.
        Some(Commands::Init { force }) => commands::init::execute(config_path, force),
        Some(Commands::Run {
            sim,
            output,
            no_progress,
        }) => {
            let mut config = loaded?;
            sim.apply(&mut config)?;
            commands::run::execute(&config, output, !no_progress, formatter)
        }
        Some(Commands::Batch { sim, runs }) => {
            let mut config = loaded?;
            sim.apply(&mut config)?;
            commands::batch::execute(&config, runs, formatter)
        }
        Some(Commands::Map { sim }) => {
            let mut config = loaded?;
            sim.apply_overrides(&mut config)?;
            commands::map::execute(&config, formatter)
        }
        Some(Commands::Version) => {
            println!(
                "The version of the riot package is {}.",
                env!("CARGO_PKG_VERSION")
            );
            Ok(())
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
