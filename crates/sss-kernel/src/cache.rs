//! Lazily recomputed kernels.
//!
//! [`CachedProfile`] pairs a [`Profile`] with its kernel and a version
//! counter. Every setter that changes a value bumps the version; reading
//! the kernel recomputes it only when the cached entry was built for an
//! older version.
//!
//! ```text
//! Dirty --kernel()--> Clean
//! Clean --set_*()---> Dirty   (only when the value changes)
//! ```
//!
//! [`SharedProfile`] wraps a cached profile in a mutex for callers that
//! share one profile across threads.
//!
//! # Example
//!
//! ```rust
//! use sss_kernel::CachedProfile;
//! use sss_math::Vec3;
//!
//! let mut slot = CachedProfile::default();
//! assert!(slot.is_dirty());
//!
//! let first = *slot.kernel().unwrap();
//! assert!(!slot.is_dirty());
//!
//! slot.set_std_dev2(Vec3::splat(1.5));
//! assert!(slot.is_dirty());
//! assert_ne!(*slot.kernel().unwrap(), first);
//! ```

use std::sync::Mutex;

use sss_core::{SssError, SssResult};
use sss_math::Vec3;
use tracing::debug;

use crate::kernel::Kernel;
use crate::profile::Profile;
use crate::synth::compute_kernel;

/// A profile with a lazily computed, version-checked kernel.
#[derive(Debug, Clone, Default)]
pub struct CachedProfile {
    name: String,
    profile: Profile,
    version: u64,
    cached: Option<(u64, Kernel)>,
    recomputes: u64,
}

impl CachedProfile {
    /// Wraps a profile. The kernel starts dirty.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    /// Wraps a named profile.
    pub fn named(name: impl Into<String>, profile: Profile) -> Self {
        Self {
            name: name.into(),
            ..Self::new(profile)
        }
    }

    /// Display name (may be empty).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the profile. Does not affect the kernel.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Current parameters.
    #[inline]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Parameter version, bumped on every effective change.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of times the kernel has been synthesized.
    #[inline]
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// Replaces all parameters.
    pub fn set_profile(&mut self, profile: Profile) {
        if self.profile != profile {
            self.profile = profile;
            self.invalidate();
        }
    }

    /// Sets the first lobe's standard deviations.
    pub fn set_std_dev1(&mut self, std_dev1: Vec3) {
        self.set_profile(Profile {
            std_dev1,
            ..self.profile
        });
    }

    /// Sets the second lobe's standard deviations.
    pub fn set_std_dev2(&mut self, std_dev2: Vec3) {
        self.set_profile(Profile {
            std_dev2,
            ..self.profile
        });
    }

    /// Sets the mixing weight.
    pub fn set_lerp_weight(&mut self, lerp_weight: f32) {
        self.set_profile(Profile {
            lerp_weight,
            ..self.profile
        });
    }

    /// Forces the next read to recompute.
    #[inline]
    pub fn invalidate(&mut self) {
        self.version += 1;
    }

    /// Whether the next [`kernel`](Self::kernel) call will recompute.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        !matches!(self.cached, Some((version, _)) if version == self.version)
    }

    /// The kernel, if it is up to date.
    pub fn cached_kernel(&self) -> Option<&Kernel> {
        match &self.cached {
            Some((version, kernel)) if *version == self.version => Some(kernel),
            _ => None,
        }
    }

    /// Returns the kernel, recomputing it first if dirty.
    ///
    /// # Errors
    ///
    /// Propagates [`SssError::InvalidParameter`] from synthesis. The
    /// profile stays dirty and any stale kernel is dropped.
    pub fn kernel(&mut self) -> SssResult<&Kernel> {
        let kernel = match self.cached.take() {
            Some((version, kernel)) if version == self.version => kernel,
            _ => {
                debug!(name = %self.name, version = self.version, "recomputing kernel");
                let kernel = compute_kernel(&self.profile)?;
                self.recomputes += 1;
                kernel
            }
        };
        Ok(&self.cached.insert((self.version, kernel)).1)
    }

    /// Brings the kernel up to date without borrowing it.
    pub fn refresh(&mut self) -> SssResult<()> {
        self.kernel().map(|_| ())
    }
}

/// A [`CachedProfile`] shared across threads.
///
/// Every access locks; reads recompute under the lock when dirty and
/// return a copy of the kernel.
#[derive(Debug, Default)]
pub struct SharedProfile {
    inner: Mutex<CachedProfile>,
}

impl SharedProfile {
    /// Wraps a cached profile.
    pub fn new(profile: CachedProfile) -> Self {
        Self {
            inner: Mutex::new(profile),
        }
    }

    /// Returns the up-to-date kernel.
    pub fn kernel(&self) -> SssResult<Kernel> {
        let mut guard = self.lock()?;
        guard.kernel().copied()
    }

    /// Current parameters.
    pub fn profile(&self) -> SssResult<Profile> {
        Ok(*self.lock()?.profile())
    }

    /// Mutates the profile under the lock.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sss_kernel::SharedProfile;
    ///
    /// let shared = SharedProfile::default();
    /// shared.update(|p| p.set_lerp_weight(0.8)).unwrap();
    /// assert_eq!(shared.profile().unwrap().lerp_weight, 0.8);
    /// ```
    pub fn update<R>(&self, f: impl FnOnce(&mut CachedProfile) -> R) -> SssResult<R> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    /// Consumes the wrapper.
    pub fn into_inner(self) -> SssResult<CachedProfile> {
        self.inner
            .into_inner()
            .map_err(|_| SssError::other("profile lock poisoned"))
    }

    fn lock(&self) -> SssResult<std::sync::MutexGuard<'_, CachedProfile>> {
        self.inner
            .lock()
            .map_err(|_| SssError::other("profile lock poisoned"))
    }
}
