//! curve-opdata CLI - build and check pairing engine op-data
//!
//! This CLI encodes curve op-data headers, builds operation inputs from hex
//! operands, validates foreign buffers and compares engine results.

mod commands;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{build, compare, curves, encode, validate};
use console::style;
use std::path::PathBuf;

/// CLI for curve op-data headers and operation inputs
#[derive(Parser)]
#[command(name = "curve-opdata")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Common options shared across commands
#[derive(Args, Clone)]
pub struct CommonArgs {
    /// Config file (defaults to <config dir>/curve-opdata/config.toml)
    #[arg(long, env = "CURVE_OPDATA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, default_value = "human")]
    pub output: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in and configured curves
    Curves(curves::CurvesArgs),

    /// Print the op-data header for a curve
    Encode(encode::EncodeArgs),

    /// Build an operation input from hex operands
    Build(build::BuildArgs),

    /// Check the declared lengths of an op-data header or operation input
    Validate(validate::ValidateArgs),

    /// Compare an engine result with the expected result
    Compare(compare::CompareArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    // Run command
    let result = match cli.command {
        Commands::Curves(args) => {
            let config = config::Config::load(&args.common)?;
            curves::run(&config, args)
        }
        Commands::Encode(args) => {
            let config = config::Config::load(&args.common)?;
            encode::run(&config, args)
        }
        Commands::Build(args) => {
            let config = config::Config::load(&args.common)?;
            build::run(&config, args)
        }
        Commands::Validate(args) => {
            let config = config::Config::load(&args.common)?;
            validate::run(&config, args)
        }
        Commands::Compare(args) => {
            let config = config::Config::load(&args.common)?;
            compare::run(&config, args)
        }
    };

    // Handle errors nicely
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
