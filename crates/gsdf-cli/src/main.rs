//! gsdf - DICOM Grayscale Standard Display Function tool
//!
//! Encodes luminance to JND code values, decodes codes back to luminance,
//! prints the GSDF table and computes display calibration targets.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gsdf_core::fpenv;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gsdf")]
#[command(author, version, about = "DICOM GSDF luminance/JND tool")]
#[command(long_about = "
Encode and decode values with the DICOM Grayscale Standard Display Function.

Examples:
  gsdf encode 0.05 130.0662 4000          # Normalized code values
  gsdf encode 130.0662 --int              # 10-bit code (512)
  gsdf decode 512 --int                   # Luminance of code 512
  gsdf table --start 1 --end 1023 --step 64
  gsdf target --min 0.5 --max 400 --bits 8 --contrast
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Do not warn about invalid values (log of zero or negative input)
    #[arg(long, global = true)]
    ignore_invalid: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Luminance (cd/m2) to code values
    #[command(visible_alias = "e")]
    Encode(EncodeArgs),

    /// Code values to luminance (cd/m2)
    #[command(visible_alias = "d")]
    Decode(DecodeArgs),

    /// Print luminance for a range of JND indices
    #[command(visible_alias = "t")]
    Table(TableArgs),

    /// Target luminance per driving level for a display
    Target(TargetArgs),
}

#[derive(Args)]
struct EncodeArgs {
    /// Luminance values in cd/m2
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Output 10-bit integer codes
    #[arg(short, long)]
    int: bool,
}

#[derive(Args)]
struct DecodeArgs {
    /// Code values (normalized, or integer with --int)
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Inputs are 10-bit integer codes
    #[arg(short, long)]
    int: bool,
}

#[derive(Args)]
struct TableArgs {
    /// First JND index
    #[arg(long, default_value = "1")]
    start: u32,

    /// Last JND index
    #[arg(long, default_value = "1023")]
    end: u32,

    /// Index increment
    #[arg(long, default_value = "1")]
    step: u32,
}

#[derive(Args)]
struct TargetArgs {
    /// Minimum display luminance in cd/m2
    #[arg(long)]
    min: f64,

    /// Maximum display luminance in cd/m2
    #[arg(long)]
    max: f64,

    /// Driving level bit depth
    #[arg(short, long, default_value = "8")]
    bits: u32,

    /// Also print the contrast response of each step
    #[arg(short, long)]
    contrast: bool,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let policy = if cli.ignore_invalid {
        fpenv::InvalidOp::Ignore
    } else {
        fpenv::InvalidOp::Warn
    };
    let _fpenv = fpenv::set_invalid_op(policy);
    debug!(?policy, threads = cli.threads, "starting");

    match cli.command {
        Commands::Encode(args) => commands::encode::run(args, cli.verbose),
        Commands::Decode(args) => commands::decode::run(args, cli.verbose),
        Commands::Table(args) => commands::table::run(args, cli.verbose),
        Commands::Target(args) => commands::target::run(args, cli.verbose),
    }
}
