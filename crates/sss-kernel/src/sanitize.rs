//! Range clamping for editor- or file-supplied profiles.
//!
//! Synthesis rejects out-of-domain parameters instead of clamping them.
//! Callers that accept loosely validated input (a config file, an editor
//! slider) run [`sanitize_profile`] first to pull values into the
//! supported range.

use sss_math::{saturate, Vec3};

use crate::profile::Profile;

/// Smallest supported standard deviation.
pub const STD_DEV_MIN: f32 = 0.05;

/// Largest supported standard deviation.
pub const STD_DEV_MAX: f32 = 2.0;

/// Maximum number of profiles in a [`crate::ProfileSet`].
pub const MAX_PROFILES: usize = 8;

/// Default bilateral depth-weighting scale of a [`crate::ProfileSet`].
pub const DEFAULT_BILATERAL_SCALE: f32 = 0.1;

/// Clamps a profile into the supported parameter range.
///
/// Standard deviations are clamped to [`STD_DEV_MIN`]..=[`STD_DEV_MAX`]
/// and the lerp weight to `[0, 1]`. NaN maps to the lower bound.
///
/// # Example
///
/// ```rust
/// use sss_kernel::{sanitize_profile, Profile, STD_DEV_MIN};
/// use sss_math::Vec3;
///
/// let raw = Profile::new(Vec3::new(0.0, 0.3, 5.0), Vec3::ONE, 1.7);
/// let clean = sanitize_profile(&raw);
/// assert_eq!(clean.std_dev1, Vec3::new(STD_DEV_MIN, 0.3, 2.0));
/// assert_eq!(clean.lerp_weight, 1.0);
/// ```
pub fn sanitize_profile(profile: &Profile) -> Profile {
    let min = Vec3::splat(STD_DEV_MIN);
    let max = Vec3::splat(STD_DEV_MAX);
    Profile {
        std_dev1: profile.std_dev1.clamp(min, max),
        std_dev2: profile.std_dev2.clamp(min, max),
        lerp_weight: saturate(profile.lerp_weight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_unchanged() {
        let p = Profile::new(Vec3::new(0.3, 0.2, 0.1), Vec3::new(1.0, 0.8, 0.5), 0.5);
        assert_eq!(sanitize_profile(&p), p);
    }

    #[test]
    fn test_clamps_out_of_range() {
        let p = Profile::new(Vec3::new(-1.0, 0.01, 0.3), Vec3::new(2.5, f32::INFINITY, 1.0), -0.2);
        let clean = sanitize_profile(&p);
        assert_eq!(clean.std_dev1, Vec3::new(STD_DEV_MIN, STD_DEV_MIN, 0.3));
        assert_eq!(clean.std_dev2, Vec3::new(STD_DEV_MAX, STD_DEV_MAX, 1.0));
        assert_eq!(clean.lerp_weight, 0.0);
    }

    #[test]
    fn test_nan_maps_to_lower_bound() {
        let p = Profile::new(Vec3::splat(f32::NAN), Vec3::ONE, f32::NAN);
        let clean = sanitize_profile(&p);
        assert_eq!(clean.std_dev1, Vec3::splat(STD_DEV_MIN));
        assert_eq!(clean.lerp_weight, 0.0);
        assert!(clean.validate().is_ok());
    }

    #[test]
    fn test_sanitized_is_always_valid() {
        let wild = [-3.0, 0.0, 1e-9, 0.7, 1e9, f32::NAN, f32::NEG_INFINITY];
        for &a in &wild {
            for &b in &wild {
                let p = Profile::new(Vec3::new(a, b, a), Vec3::new(b, a, b), a);
                assert!(sanitize_profile(&p).validate().is_ok(), "{p:?}");
            }
        }
    }
}
