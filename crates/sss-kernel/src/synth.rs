//! Kernel synthesis by deterministic importance sampling.
//!
//! Samples are placed at stratum midpoints `u = (i + 0.5) / N` mapped
//! through the quantile of a two-lobe mixture built from the widest
//! channel of each lobe, so no channel is under-sampled in its tails.
//! Each channel's weight is the ratio of its own mixture density to the
//! sampling density at the tap, divided by `N`.
//!
//! The raw estimator does not integrate to exactly one with a finite tap
//! count, so weights are renormalized per channel in a second pass after
//! all taps have been accumulated.
//!
//! # Example
//!
//! ```rust
//! use sss_kernel::{compute_kernel, Profile};
//! use sss_math::Vec3;
//!
//! let profile = Profile::new(Vec3::splat(0.3), Vec3::splat(1.0), 0.5);
//! let kernel = compute_kernel(&profile).unwrap();
//!
//! let sums = kernel.channel_sums();
//! assert!((sums.r() - 1.0).abs() < 1e-4);
//! assert!(kernel.center().position.abs() < 1e-3);
//! ```

use sss_core::{SssError, SssResult};
use sss_math::{gaussian_mix, mix_quantile, Vec3};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::kernel::{Kernel, KernelSample, NUM_SAMPLES};
use crate::profile::{Profile, CHANNELS};

/// Computes the [`NUM_SAMPLES`]-tap kernel for a profile.
///
/// Pure function: the same profile always yields the same kernel.
///
/// # Errors
///
/// [`sss_core::SssError::InvalidParameter`] if the profile has a
/// non-positive, non-finite or unrepresentably small/large standard
/// deviation, or a lerp weight outside `[0, 1]`. A kernel whose weights
/// cannot be normalized is rejected the same way. No partial kernel is
/// produced, and a returned kernel never holds NaN or infinite values.
pub fn compute_kernel(profile: &Profile) -> SssResult<Kernel<NUM_SAMPLES>> {
    compute_kernel_n::<NUM_SAMPLES>(profile)
}

/// Computes an `N`-tap kernel for a profile.
///
/// `N` must be odd; an even `N` is rejected at compile time. The
/// quantile approximation's error bound was validated for the default
/// [`NUM_SAMPLES`]; other counts keep the energy-conservation invariant
/// exactly but shift tap placement.
pub fn compute_kernel_n<const N: usize>(profile: &Profile) -> SssResult<Kernel<N>> {
    #[allow(clippy::let_unit_value)]
    let () = Kernel::<N>::ODD_SAMPLE_COUNT;

    trace!(
        std_dev1 = ?profile.std_dev1,
        std_dev2 = ?profile.std_dev2,
        lerp_weight = profile.lerp_weight,
        samples = N,
        "synth::compute_kernel"
    );
    profile.validate()?;

    let Profile {
        std_dev1,
        std_dev2,
        lerp_weight,
    } = *profile;
    let max_std_dev1 = profile.max_std_dev1();
    let max_std_dev2 = profile.max_std_dev2();
    let n = N as f32;

    let mut samples = [KernelSample::default(); N];
    let mut weight_sum = Vec3::ZERO;

    for (i, sample) in samples.iter_mut().enumerate() {
        let u = (i as f32 + 0.5) / n;
        let position = mix_quantile(u, max_std_dev1, max_std_dev2, lerp_weight);

        // Sampling density, shared by all channels
        let pdf = gaussian_mix(position, max_std_dev1, max_std_dev2, lerp_weight);
        let value = std_dev1.zip_map(std_dev2, |s1, s2| {
            gaussian_mix(position, s1, s2, lerp_weight)
        });

        let weight = value / (pdf * n);
        *sample = KernelSample { weight, position };
        weight_sum += weight;
    }

    let norm = normalization(weight_sum)?;
    for sample in &mut samples {
        sample.weight *= norm;
    }

    debug!(weight_sum = ?weight_sum, "kernel synthesized");
    Ok(Kernel { samples })
}

/// Per-channel reciprocal of the raw weight sums.
///
/// A channel whose sum is zero, non-finite, or too small to invert would
/// turn every weight into NaN or infinity, so it is rejected instead.
fn normalization(weight_sum: Vec3) -> SssResult<Vec3> {
    let norm = Vec3::ONE / weight_sum;
    for (c, channel) in CHANNELS.iter().enumerate() {
        let sum = weight_sum[c];
        if !(sum.is_finite() && sum > 0.0 && norm[c].is_finite()) {
            return Err(SssError::invalid_parameter(
                format!("std_dev.{channel}"),
                format!("kernel weights cannot be normalized (sum = {sum})"),
            ));
        }
    }
    Ok(norm)
}
