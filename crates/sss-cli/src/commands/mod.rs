//! CLI command implementations

pub mod check;
pub mod kernel;
pub mod profiles;
pub mod quantile;

use anyhow::{bail, Context, Result};
use std::path::Path;

use sss_kernel::{Kernel, ProfileSet};
use sss_math::Vec3;

/// Load a profile set from path
pub fn load_profile_set(path: &Path) -> Result<ProfileSet> {
    ProfileSet::from_file(path)
        .with_context(|| format!("Failed to load profiles: {}", path.display()))
}

/// Parse comma-separated RGB values.
pub fn parse_rgb(s: &str) -> Result<Vec3> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        bail!("Expected 3 values (R,G,B), got {}", parts.len());
    }
    Ok(Vec3::new(
        parts[0].trim().parse().with_context(|| format!("Bad R value in '{s}'"))?,
        parts[1].trim().parse().with_context(|| format!("Bad G value in '{s}'"))?,
        parts[2].trim().parse().with_context(|| format!("Bad B value in '{s}'"))?,
    ))
}

/// Print a kernel as an aligned table.
pub fn print_kernel(kernel: &Kernel) {
    println!("  {:>3}  {:>10}  {:>10}  {:>10}  {:>10}", "#", "position", "w.r", "w.g", "w.b");
    for (i, tap) in kernel.iter().enumerate() {
        println!(
            "  {:>3}  {:>10.6}  {:>10.6}  {:>10.6}  {:>10.6}",
            i,
            tap.position,
            tap.weight.r(),
            tap.weight.g(),
            tap.weight.b()
        );
    }
    let sums = kernel.channel_sums();
    println!(
        "  {:>3}  {:>10}  {:>10.6}  {:>10.6}  {:>10.6}",
        "sum",
        "",
        sums.r(),
        sums.g(),
        sums.b()
    );
}

/// Log message if verbose
pub fn log_verbose(msg: &str, verbose: bool) {
    if verbose {
        eprintln!("{}", msg);
    }
}
