//! Gaussian densities.
//!
//! - [`gaussian`] - Zero-mean normalized 1D Gaussian
//! - [`gaussian_mix`] - Linear mix of two zero-mean Gaussians
//!
//! # Formula
//!
//! ```text
//! G(x, s)        = exp(-x^2 / (2 s^2)) / sqrt(2 pi s^2)
//! M(x; s1, s2, w) = lerp(G(x, s1), G(x, s2), w)
//! ```

use std::f32::consts::PI;

use crate::interp::lerp;

/// Zero-mean normalized 1D Gaussian density.
///
/// `std_dev` must be positive; zero yields NaN/Inf.
///
/// # Example
///
/// ```rust
/// use sss_math::gaussian;
///
/// // Peak of the unit Gaussian is 1/sqrt(2 pi)
/// assert!((gaussian(0.0, 1.0) - 0.398_942_3).abs() < 1e-6);
/// assert_eq!(gaussian(1.0, 1.0), gaussian(-1.0, 1.0));
/// ```
#[inline]
pub fn gaussian(x: f32, std_dev: f32) -> f32 {
    let variance = std_dev * std_dev;
    (-x * x / (2.0 * variance)).exp() / (2.0 * PI * variance).sqrt()
}

/// Density of a two-lobe Gaussian mixture.
///
/// `lerp_weight = 0` is the pure first lobe, `1` the pure second lobe.
///
/// # Example
///
/// ```rust
/// use sss_math::{gaussian, gaussian_mix};
///
/// assert_eq!(gaussian_mix(0.4, 0.3, 1.0, 0.0), gaussian(0.4, 0.3));
/// ```
#[inline]
pub fn gaussian_mix(x: f32, std_dev1: f32, std_dev2: f32, lerp_weight: f32) -> f32 {
    lerp(gaussian(x, std_dev1), gaussian(x, std_dev2), lerp_weight)
}
