//! sss - Subsurface scattering kernel CLI
//!
//! Synthesizes, inspects and validates importance-sampled scattering kernels.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "sss")]
#[command(author, version, about = "Subsurface scattering kernel synthesis")]
#[command(long_about = "
Computes the importance-sampled blur kernels used to approximate
subsurface scattering from two-lobe Gaussian profiles.

Examples:
  sss kernel --std-dev1 0.3,0.2,0.1 --std-dev2 1,0.8,0.5 --lerp 0.5
  sss kernel --std-dev1 0.3,0.3,0.3 --std-dev2 1,1,1 --json
  sss profiles skin.yaml                 # All kernels of a profile set
  sss profiles skin.yaml --vec4          # Packed constant-buffer table
  sss quantile 0.975                     # Normal quantile approximation
  sss check skin.yaml                    # Verify kernel invariants
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
    /// Compute the kernel of a single profile
    #[command(visible_alias = "k")]
    Kernel(KernelArgs),

    /// Compute all kernels of a profile set file
    #[command(visible_alias = "p")]
    Profiles(ProfilesArgs),

    /// Evaluate the normal quantile approximation
    #[command(visible_alias = "q")]
    Quantile(QuantileArgs),

    /// Verify kernel invariants for a profile set file
    Check(CheckArgs),
}

#[derive(Args)]
struct KernelArgs {
    /// First lobe standard deviations (R,G,B)
    #[arg(long, default_value = "0.3,0.3,0.3")]
    std_dev1: String,

    /// Second lobe standard deviations (R,G,B)
    #[arg(long, default_value = "0.6,0.6,0.6")]
    std_dev2: String,

    /// Mixing weight between the lobes (0 = lobe 1, 1 = lobe 2)
    #[arg(short, long = "lerp", default_value = "0.5")]
    lerp_weight: f32,

    /// Clamp parameters into the supported range before synthesis
    #[arg(long)]
    sanitize: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ProfilesArgs {
    /// Profile set file (YAML, or JSON by extension)
    input: PathBuf,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,

    /// Print the packed (w.r, w.g, w.b, position) table
    #[arg(long)]
    vec4: bool,
}

#[derive(Args)]
struct QuantileArgs {
    /// Probability in (0, 1)
    p: f32,

    /// Standard deviation of the Gaussian
    #[arg(short, long, default_value = "1.0")]
    std_dev: f32,
}

#[derive(Args)]
struct CheckArgs {
    /// Profile set file(s) to verify
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Allowed deviation of per-channel weight sums from 1
    #[arg(short, long, default_value = "1e-4")]
    tolerance: f32,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .without_time()
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

    match cli.command {
        Commands::Kernel(args) => commands::kernel::run(args, cli.verbose),
        Commands::Profiles(args) => commands::profiles::run(args, cli.verbose),
        Commands::Quantile(args) => commands::quantile::run(args),
        Commands::Check(args) => commands::check::run(args, cli.verbose),
    }
}
