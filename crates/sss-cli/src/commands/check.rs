//! Check command
//!
//! Loads profile set files and verifies the invariants of every kernel:
//! odd tap count, finite values, per-channel energy conservation, and
//! non-decreasing tap positions.

use crate::CheckArgs;
use anyhow::{bail, Result};
#[allow(unused_imports)]
use tracing::{debug, info, trace, warn};

use sss_kernel::Kernel;

pub fn run(args: CheckArgs, verbose: bool) -> Result<()> {
    trace!(files = args.input.len(), tolerance = args.tolerance, "check::run");

    let mut failures = 0usize;
    for path in &args.input {
        let mut set = super::load_profile_set(path)?;
        let kernels = set.kernels()?;

        for (slot, kernel) in set.iter().zip(&kernels) {
            let problems = verify_kernel(kernel, args.tolerance);
            if problems.is_empty() {
                super::log_verbose(
                    &format!("{}: '{}' ok", path.display(), slot.name()),
                    verbose,
                );
                continue;
            }
            failures += problems.len();
            for problem in problems {
                warn!(file = %path.display(), profile = slot.name(), "{}", problem);
                println!("{}: '{}': {}", path.display(), slot.name(), problem);
            }
        }
    }

    if failures > 0 {
        bail!("{} kernel invariant violation(s)", failures);
    }
    println!("All kernels OK");
    Ok(())
}

/// Returns a description of every violated invariant.
pub fn verify_kernel<const N: usize>(kernel: &Kernel<N>, tolerance: f32) -> Vec<String> {
    let mut problems = Vec::new();

    if kernel.len() % 2 == 0 {
        problems.push(format!("even tap count {}", kernel.len()));
    }
    for (i, tap) in kernel.iter().enumerate() {
        if !tap.position.is_finite() || !tap.weight.is_finite() {
            problems.push(format!("tap {} is not finite", i));
        }
    }

    let sums = kernel.channel_sums();
    for (c, name) in ["r", "g", "b"].iter().enumerate() {
        let err = (sums[c] - 1.0).abs();
        if !(err <= tolerance) {
            problems.push(format!("channel {} sums to {} (|err| = {:.2e})", name, sums[c], err));
        }
    }

    let positions = kernel.positions();
    if let Some(i) = positions.windows(2).position(|w| w[0] > w[1]) {
        problems.push(format!(
            "positions decrease at tap {}: {} > {}",
            i,
            positions[i],
            positions[i + 1]
        ));
    }

    problems
}
