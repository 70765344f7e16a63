//! A bounded collection of scattering profiles.
//!
//! [`ProfileSet`] owns up to [`MAX_PROFILES`] cached profiles plus the
//! bilateral depth-weighting scale the blur pass reads. Kernel synthesis
//! never touches the bilateral scale; it is carried so the whole set can
//! be uploaded together.
//!
//! # Example
//!
//! ```rust
//! use sss_kernel::{Profile, ProfileSet};
//! use sss_math::Vec3;
//!
//! let mut set = ProfileSet::new();
//! set.push("marble", Profile::new(Vec3::splat(0.8), Vec3::splat(1.6), 0.3));
//!
//! let kernels = set.kernels().unwrap();
//! assert_eq!(kernels.len(), 2);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use sss_core::{SssError, SssResult};
use sss_math::glam::Vec4;
use sss_math::saturate;
use tracing::{debug, warn};

use crate::cache::CachedProfile;
use crate::kernel::Kernel;
use crate::profile::Profile;
use crate::sanitize::{sanitize_profile, DEFAULT_BILATERAL_SCALE, MAX_PROFILES};

/// Collection of profiles sharing one bilateral scale.
#[derive(Debug, Clone)]
pub struct ProfileSet {
    profiles: Vec<CachedProfile>,
    /// Depth-weighting scale for the bilateral blur pass.
    pub bilateral_scale: f32,
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileSet {
    /// Creates a set holding one default profile.
    pub fn new() -> Self {
        Self {
            profiles: vec![CachedProfile::named("default", Profile::default())],
            bilateral_scale: DEFAULT_BILATERAL_SCALE,
        }
    }

    /// Creates a set from raw parts without sanitizing.
    pub fn from_parts(profiles: Vec<CachedProfile>, bilateral_scale: f32) -> Self {
        Self {
            profiles,
            bilateral_scale,
        }
    }

    /// Number of profiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when the set holds no profiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Appends a named profile.
    ///
    /// The set may exceed [`MAX_PROFILES`] until [`sanitize`](Self::sanitize)
    /// runs.
    pub fn push(&mut self, name: impl Into<String>, profile: Profile) {
        self.profiles.push(CachedProfile::named(name, profile));
    }

    /// Profile at `index`.
    pub fn get(&self, index: usize) -> SssResult<&CachedProfile> {
        let len = self.profiles.len();
        self.profiles
            .get(index)
            .ok_or_else(|| SssError::profile_index(index, len))
    }

    /// Mutable profile at `index`.
    pub fn get_mut(&mut self, index: usize) -> SssResult<&mut CachedProfile> {
        let len = self.profiles.len();
        self.profiles
            .get_mut(index)
            .ok_or_else(|| SssError::profile_index(index, len))
    }

    /// Looks up a profile by name.
    pub fn find(&self, name: &str) -> Option<&CachedProfile> {
        self.profiles.iter().find(|p| p.name() == name)
    }

    /// Iterates over the profiles.
    pub fn iter(&self) -> std::slice::Iter<'_, CachedProfile> {
        self.profiles.iter()
    }

    /// Pulls the set into its supported shape.
    ///
    /// - Truncates to [`MAX_PROFILES`] entries
    /// - Adds a default profile if the set is empty
    /// - Clamps every profile with [`sanitize_profile`]
    /// - Clamps the bilateral scale to `[0, 1]`
    ///
    /// Only profiles whose values actually change become dirty.
    pub fn sanitize(&mut self) {
        if self.profiles.len() > MAX_PROFILES {
            warn!(
                count = self.profiles.len(),
                max = MAX_PROFILES,
                "too many profiles, truncating"
            );
            self.profiles.truncate(MAX_PROFILES);
        }
        if self.profiles.is_empty() {
            self.profiles
                .push(CachedProfile::named("default", Profile::default()));
        }
        for slot in &mut self.profiles {
            let clean = sanitize_profile(slot.profile());
            slot.set_profile(clean);
        }
        self.bilateral_scale = saturate(self.bilateral_scale);
    }

    /// Brings every kernel up to date and returns them in profile order.
    ///
    /// Dirty profiles are recomputed in parallel when the `parallel`
    /// feature is enabled.
    ///
    /// # Errors
    ///
    /// The first synthesis error encountered. Profiles computed before the
    /// failure keep their fresh kernels.
    pub fn kernels(&mut self) -> SssResult<Vec<Kernel>> {
        let dirty = self.profiles.iter().filter(|p| p.is_dirty()).count();
        debug!(total = self.profiles.len(), dirty, "refreshing kernels");

        #[cfg(feature = "parallel")]
        self.profiles
            .par_iter_mut()
            .try_for_each(CachedProfile::refresh)?;
        #[cfg(not(feature = "parallel"))]
        self.profiles
            .iter_mut()
            .try_for_each(CachedProfile::refresh)?;

        self.profiles
            .iter_mut()
            .map(|p| p.kernel().copied())
            .collect()
    }

    /// All kernels packed as one flat `(w.r, w.g, w.b, position)` table.
    ///
    /// Kernel `k`'s taps occupy `k * NUM_SAMPLES .. (k + 1) * NUM_SAMPLES`.
    pub fn to_vec4_table(&mut self) -> SssResult<Vec<Vec4>> {
        Ok(self.kernels()?.iter().flat_map(|k| k.to_vec4()).collect())
    }
}

impl<'a> IntoIterator for &'a ProfileSet {
    type Item = &'a CachedProfile;
    type IntoIter = std::slice::Iter<'a, CachedProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}
