//! Scattering profile parameters.
//!
//! A [`Profile`] describes a two-lobe Gaussian scattering model for one
//! material preset: a narrow lobe, a wide lobe, and the weight mixing them.
//! It is an immutable value; caching and invalidation live in
//! [`crate::cache`].

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};
use sss_core::{SssError, SssResult};
use sss_math::Vec3;

pub(crate) const CHANNELS: [&str; 3] = ["r", "g", "b"];

/// Two-lobe Gaussian scattering profile.
///
/// # Fields
///
/// - `std_dev1` - Per-channel standard deviation of the first lobe (world units)
/// - `std_dev2` - Per-channel standard deviation of the second, usually wider, lobe
/// - `lerp_weight` - Mix between lobes: `0` is pure lobe 1, `1` is pure lobe 2
///
/// # Example
///
/// ```rust
/// use sss_kernel::Profile;
/// use sss_math::Vec3;
///
/// let skin = Profile::new(Vec3::splat(0.3), Vec3::splat(1.0), 0.5);
/// assert!(skin.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// First lobe standard deviations.
    pub std_dev1: Vec3,
    /// Second lobe standard deviations.
    pub std_dev2: Vec3,
    /// Mixing weight between the lobes.
    pub lerp_weight: f32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            std_dev1: Vec3::splat(0.3),
            std_dev2: Vec3::splat(0.6),
            lerp_weight: 0.5,
        }
    }
}

impl Profile {
    /// Creates a profile from both lobes and the mixing weight.
    #[inline]
    pub const fn new(std_dev1: Vec3, std_dev2: Vec3, lerp_weight: f32) -> Self {
        Self {
            std_dev1,
            std_dev2,
            lerp_weight,
        }
    }

    /// Profile whose two lobes are identical.
    ///
    /// The mixture collapses to a single Gaussian regardless of the weight.
    #[inline]
    pub const fn single_lobe(std_dev: Vec3) -> Self {
        Self::new(std_dev, std_dev, 0.0)
    }

    /// Widest channel of the first lobe.
    #[inline]
    pub fn max_std_dev1(&self) -> f32 {
        self.std_dev1.max_element()
    }

    /// Widest channel of the second lobe.
    #[inline]
    pub fn max_std_dev2(&self) -> f32 {
        self.std_dev2.max_element()
    }

    /// Checks the parameter domain required by kernel synthesis.
    ///
    /// Every standard deviation must be finite and strictly positive, with a
    /// variance that is a normal `f32` (roughly `1.1e-19 ..= 7.3e18`). The
    /// lerp weight must be finite and within `[0, 1]`.
    ///
    /// # Errors
    ///
    /// [`SssError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> SssResult<()> {
        check_std_dev("std_dev1", self.std_dev1)?;
        check_std_dev("std_dev2", self.std_dev2)?;
        if !(self.lerp_weight.is_finite() && (0.0..=1.0).contains(&self.lerp_weight)) {
            return Err(SssError::invalid_parameter(
                "lerp_weight",
                format!("must be within [0, 1], got {}", self.lerp_weight),
            ));
        }
        Ok(())
    }
}

fn check_std_dev(name: &str, std_dev: Vec3) -> SssResult<()> {
    for (c, channel) in CHANNELS.iter().enumerate() {
        let value = std_dev[c];
        if !(value.is_finite() && value > 0.0) {
            return Err(SssError::invalid_parameter(
                format!("{name}.{channel}"),
                format!("must be finite and > 0, got {value}"),
            ));
        }
        // Variance and the Gaussian normalizer must stay normal f32 values
        let variance = value * value;
        if !(variance.is_normal() && (2.0 * PI * variance).is_finite()) {
            return Err(SssError::invalid_parameter(
                format!("{name}.{channel}"),
                format!("{value} is too small or too large to sample"),
            ));
        }
    }
    Ok(())
}
