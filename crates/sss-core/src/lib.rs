//! # sss-core
//!
//! Core types for subsurface scattering kernel synthesis.
//!
//! This crate provides the foundation shared by every SSS-RS crate:
//!
//! - [`SssError`] - Unified error type
//! - [`SssResult`] - Result alias
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. `sss-math` stands alone;
//! the crates that can fail depend on `sss-core`:
//!
//! ```text
//! sss-core (this crate)      sss-math (Vec3, Gaussian, normal quantile)
//!    ^                          ^
//!    |                          |
//!    +-- sss-kernel (profiles, kernel synthesis, caching)
//!    +-- sss-tests
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;
