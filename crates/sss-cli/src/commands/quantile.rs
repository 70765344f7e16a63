//! Quantile command
//!
//! Evaluates the normal quantile approximation used for tap placement.

use crate::QuantileArgs;
use anyhow::{bail, Result};

use sss_math::{normal_cdf_inverse, QUANTILE_MAX_ERROR};

pub fn run(args: QuantileArgs) -> Result<()> {
    if !(args.p > 0.0 && args.p < 1.0) {
        bail!("Probability must be in (0, 1), got {}", args.p);
    }
    if !(args.std_dev.is_finite() && args.std_dev > 0.0) {
        bail!("Standard deviation must be > 0, got {}", args.std_dev);
    }

    let x = normal_cdf_inverse(args.p, args.std_dev);
    println!(
        "{:.7}  (|error| < {:.1e})",
        x,
        QUANTILE_MAX_ERROR * args.std_dev
    );
    Ok(())
}
