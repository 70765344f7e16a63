//! # sss-math
//!
//! Math utilities for subsurface scattering kernel synthesis.
//!
//! This crate provides the numerical primitives the kernel synthesizer is
//! built from:
//!
//! - [`Vec3`] - Per-channel (RGB) triplets
//! - [`gaussian`], [`gaussian_mix`] - Gaussian and two-lobe mixture densities
//! - [`normal_cdf_inverse`], [`mix_quantile`] - Normal quantile approximation
//! - Interpolation utilities ([`lerp`], [`saturate`])
//!
//! # Usage
//!
//! ```rust
//! use sss_math::{gaussian_mix, mix_quantile};
//!
//! // Place a sample at the 25th percentile of a 0.3/1.0 mixture
//! let pos = mix_quantile(0.25, 0.3, 1.0, 0.5);
//! let pdf = gaussian_mix(pos, 0.3, 1.0, 0.5);
//! assert!(pos < 0.0 && pdf > 0.0);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop for consumers packing kernels into GPU vectors
//! - `serde` (optional) - [`Vec3`] as a three-element array
//!
//! # Used By
//!
//! - `sss-kernel` - Kernel synthesis

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod vec3;
mod interp;
mod gaussian;
mod quantile;

pub use vec3::*;
pub use interp::*;
pub use gaussian::*;
pub use quantile::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::Vec4;
}
