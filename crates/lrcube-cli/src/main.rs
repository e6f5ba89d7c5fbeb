//! lrcube - Lightroom preset to realtime filter converter

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lrcube::Interpolation;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lrcube")]
#[command(author, version, about = "Convert Lightroom XMP presets into filter parameters or .cube LUTs")]
#[command(long_about = "
Reads a Lightroom preset (XMP sidecar) and produces what a realtime color
filter needs: a JSON record of 12 normalized parameters, or, when the preset
uses per-channel HSL, a tone curve or split toning, a baked .cube LUT and
its lut3d: filter name.

Examples:
  lrcube inspect look.xmp                    # Show what the preset contains
  lrcube convert look.xmp                    # Params JSON or LUT in ./
  lrcube convert look.xmp -o luts -s 17      # Smaller LUT into ./luts
  lrcube convert look.xmp --config opts.yaml --strict
  RUST_LOG=lrcube=debug lrcube convert look.xmp
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a preset to filter parameters or a stored LUT
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Show parsed parameters and detailed adjustments
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Preset file (.xmp)
    input: PathBuf,

    /// Directory for generated LUTs
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// LUT grid size (2..=129, default 33)
    #[arg(short, long)]
    size: Option<usize>,

    /// LUT interpolation: nearest, trilinear
    #[arg(long)]
    interp: Option<Interpolation>,

    /// YAML options file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Require well-formed XML
    #[arg(long)]
    strict: bool,

    /// Print the full tagged result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InspectArgs {
    /// Preset file (.xmp)
    input: PathBuf,

    /// Require well-formed XML
    #[arg(long)]
    strict: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "lrcube=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
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

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Inspect(args) => commands::inspect::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_overrides_parse() {
        let cli = Cli::try_parse_from([
            "lrcube", "-j", "2", "convert", "look.xmp", "-s", "17", "--interp", "nearest", "--strict",
        ])
        .unwrap();
        assert_eq!(cli.threads, 2);
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.size, Some(17));
        assert_eq!(args.interp, Some(Interpolation::Nearest));
        assert!(args.strict);
        assert_eq!(args.output, PathBuf::from("."));
    }

    #[test]
    fn unknown_interpolation_rejected() {
        assert!(Cli::try_parse_from(["lrcube", "convert", "a.xmp", "--interp", "cubic"]).is_err());
    }
}
