//! Kernel command
//!
//! Synthesizes the kernel of a single profile given on the command line.

use crate::KernelArgs;
use anyhow::{Context, Result};
use serde::Serialize;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use sss_kernel::{compute_kernel, sanitize_profile, Kernel, Profile};

#[derive(Serialize)]
struct KernelReport<'a> {
    profile: &'a Profile,
    kernel: &'a Kernel,
}

pub fn run(args: KernelArgs, verbose: bool) -> Result<()> {
    trace!(std_dev1 = %args.std_dev1, std_dev2 = %args.std_dev2, lerp = args.lerp_weight, "kernel::run");

    let mut profile = Profile::new(
        super::parse_rgb(&args.std_dev1).context("--std-dev1")?,
        super::parse_rgb(&args.std_dev2).context("--std-dev2")?,
        args.lerp_weight,
    );
    if args.sanitize {
        profile = sanitize_profile(&profile);
        debug!(?profile, "sanitized");
    }

    let kernel = compute_kernel(&profile).context("Kernel synthesis failed")?;

    if args.json {
        let report = KernelReport {
            profile: &profile,
            kernel: &kernel,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    super::log_verbose(&format!("Profile: {:?}", profile), verbose);
    println!(
        "std_dev1 = {:?}, std_dev2 = {:?}, lerp = {}",
        profile.std_dev1.to_array(),
        profile.std_dev2.to_array(),
        profile.lerp_weight
    );
    super::print_kernel(&kernel);

    Ok(())
}
