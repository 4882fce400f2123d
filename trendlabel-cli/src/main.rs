//! TrendLabel CLI — labeled position datasets from daily OHLCV bars.
//!
//! Commands:
//! - `generate`: sample positions, label them green/red and write the dataset CSV
//! - `indicators`: write the full indicator table as CSV

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{prelude::*, EnvFilter};
use trendlabel_runner::{run_dataset, run_indicators, DatasetConfig};

#[derive(Parser)]
#[command(
    name = "trendlabel",
    about = "TrendLabel CLI — labeled position datasets from daily bars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample positions and write the labeled dataset CSV.
    Generate {
        /// Path to a TOML config file. Flags below override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// JSON bar file (required without --config).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Dataset CSV destination. Defaults to positions.csv.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Number of positions to generate. Defaults to 1000.
        #[arg(long)]
        quantity: Option<usize>,

        /// Maximum holding duration in days. Defaults to 30.
        #[arg(long)]
        max_duration: Option<usize>,

        /// Master seed. Drawn from entropy when absent.
        #[arg(long)]
        seed: Option<u64>,

        /// Only open positions once every indicator is defined.
        #[arg(long, default_value_t = false)]
        skip_warmup: bool,

        /// Also write the indicator table to this CSV.
        #[arg(long)]
        indicators_output: Option<PathBuf>,
    },
    /// Write the indicator table (one row per bar) as CSV.
    Indicators {
        /// JSON bar file.
        #[arg(long)]
        input: PathBuf,

        /// Indicator table CSV destination.
        #[arg(long)]
        output: PathBuf,
    },
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .context("failed to initialize tracing")
}

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            input,
            output,
            quantity,
            max_duration,
            seed,
            skip_warmup,
            indicators_output,
        } => {
            let mut dataset_config = match (config, input) {
                (Some(path), input) => {
                    let mut loaded = DatasetConfig::load(&path)
                        .with_context(|| format!("loading config {}", path.display()))?;
                    if let Some(input) = input {
                        loaded.input = input;
                    }
                    loaded
                }
                (None, Some(input)) => DatasetConfig::new(input),
                (None, None) => bail!("one of --config or --input is required"),
            };
            if let Some(output) = output {
                dataset_config.output = output;
            }
            if let Some(quantity) = quantity {
                dataset_config.quantity = quantity;
            }
            if let Some(max_duration) = max_duration {
                dataset_config.max_duration = max_duration;
            }
            if seed.is_some() {
                dataset_config.seed = seed;
            }
            if skip_warmup {
                dataset_config.skip_warmup = true;
            }
            if indicators_output.is_some() {
                dataset_config.indicators_output = indicators_output;
            }
            run_generate(&dataset_config)
        }
        Commands::Indicators { input, output } => {
            let table = run_indicators(&input, &output)?;
            println!("Indicator table: {} rows → {}", table.len(), output.display());
            Ok(())
        }
    }
}

fn run_generate(config: &DatasetConfig) -> Result<()> {
    let outcome = run_dataset(config)?;

    println!("{}", outcome.summary);
    println!("Seed:            {}", outcome.manifest.seed);
    println!("Dataset:         {}", outcome.output.display());
    println!("Manifest:        {}", outcome.manifest_path.display());
    Ok(())
}
