//! Profiles command
//!
//! Loads a profile set file and prints every kernel, or the packed
//! constant-buffer table.

use crate::ProfilesArgs;
use anyhow::Result;
use serde::Serialize;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use sss_kernel::{Kernel, Profile};

#[derive(Serialize)]
struct ProfileReport<'a> {
    name: &'a str,
    profile: &'a Profile,
    kernel: &'a Kernel,
}

#[derive(Serialize)]
struct SetReport<'a> {
    bilateral_scale: f32,
    profiles: Vec<ProfileReport<'a>>,
}

pub fn run(args: ProfilesArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), "profiles::run");

    let mut set = super::load_profile_set(&args.input)?;
    info!(count = set.len(), "Computing kernels");
    super::log_verbose(
        &format!("Loaded {} profile(s) from {}", set.len(), args.input.display()),
        verbose,
    );

    if args.vec4 {
        let table = set.to_vec4_table()?;
        if args.json {
            let rows: Vec<[f32; 4]> = table.iter().map(|v| v.to_array()).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            for v in &table {
                println!("{:+.6} {:+.6} {:+.6} {:+.6}", v.x, v.y, v.z, v.w);
            }
        }
        return Ok(());
    }

    let kernels = set.kernels()?;

    if args.json {
        let report = SetReport {
            bilateral_scale: set.bilateral_scale,
            profiles: set
                .iter()
                .zip(&kernels)
                .map(|(slot, kernel)| ProfileReport {
                    name: slot.name(),
                    profile: slot.profile(),
                    kernel,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("bilateral_scale = {}", set.bilateral_scale);
    for (i, (slot, kernel)) in set.iter().zip(&kernels).enumerate() {
        let p = slot.profile();
        println!();
        println!(
            "[{}] {}  std_dev1 = {:?}, std_dev2 = {:?}, lerp = {}",
            i,
            if slot.name().is_empty() { "(unnamed)" } else { slot.name() },
            p.std_dev1.to_array(),
            p.std_dev2.to_array(),
            p.lerp_weight
        );
        super::print_kernel(kernel);
    }

    Ok(())
}
