//! Interpolation and clamping helpers.
//!
//! - Linear interpolation ([`lerp`])
//! - Clamping utilities ([`clamp`], [`saturate`])
//!
//! # Usage
//!
//! ```rust
//! use sss_math::{lerp, saturate};
//!
//! let mid = lerp(0.0, 10.0, 0.5);
//! assert_eq!(mid, 5.0);
//! assert_eq!(saturate(1.5), 1.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
///
/// The formula returns `a` bit-exactly at `t = 0.0` whenever `b` is finite,
/// which keeps a zero mixing weight equivalent to a single lobe.
///
/// # Example
///
/// ```rust
/// use sss_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamps a value to [min, max].
///
/// NaN input returns `min`.
///
/// # Example
///
/// ```rust
/// use sss_math::clamp;
///
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(f32::NAN, 0.0, 1.0), 0.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Clamps a value to [0, 1].
///
/// Shorthand for `clamp(value, 0.0, 1.0)`.
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}
