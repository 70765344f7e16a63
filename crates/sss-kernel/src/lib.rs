//! # sss-kernel
//!
//! Subsurface scattering kernel synthesis.
//!
//! Turns a two-lobe Gaussian scattering [`Profile`] into a small
//! [`Kernel`] of importance-sampled blur taps whose per-channel weights sum
//! to one.
//!
//! # Modules
//!
//! - [`profile`] - Profile parameters and validation
//! - [`kernel`] - Kernel and tap types, GPU packing
//! - [`synth`] - The synthesis algorithm
//! - [`cache`] - Lazily recomputed, version-checked kernels
//! - [`sanitize`] - Range clamping for untrusted parameters
//! - [`profile_set`] - Bounded profile collections
//! - [`config`] - YAML/JSON profile set files
//!
//! # Example
//!
//! ```rust
//! use sss_kernel::{compute_kernel, Profile, NUM_SAMPLES};
//! use sss_math::Vec3;
//!
//! let profile = Profile::new(Vec3::splat(0.3), Vec3::splat(1.0), 0.5);
//! let kernel = compute_kernel(&profile)?;
//!
//! assert_eq!(kernel.len(), NUM_SAMPLES);
//! for tap in &kernel {
//!     println!("{:+.4} -> {:?}", tap.position, tap.weight);
//! }
//! # Ok::<(), sss_core::SssError>(())
//! ```
//!
//! ## Lazy recomputation
//!
//! ```rust
//! use sss_kernel::CachedProfile;
//!
//! let mut slot = CachedProfile::default();
//! slot.set_lerp_weight(0.25);
//! let kernel = slot.kernel()?; // computed here
//! let again = slot.kernel()?; // cached
//! # Ok::<(), sss_core::SssError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cache;
pub mod config;
pub mod kernel;
pub mod profile;
pub mod profile_set;
pub mod sanitize;
pub mod synth;

pub use cache::{CachedProfile, SharedProfile};
pub use config::{ProfileConfig, ProfileSetConfig};
pub use kernel::{Kernel, KernelSample, NUM_SAMPLES};
pub use profile::Profile;
pub use profile_set::ProfileSet;
pub use sanitize::{
    sanitize_profile, DEFAULT_BILATERAL_SCALE, MAX_PROFILES, STD_DEV_MAX, STD_DEV_MIN,
};
pub use synth::{compute_kernel, compute_kernel_n};
pub use sss_core::{SssError, SssResult};
