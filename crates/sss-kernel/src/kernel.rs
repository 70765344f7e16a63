//! Synthesized scattering kernels.
//!
//! A [`Kernel`] is a fixed-size, ordered list of [`KernelSample`] taps. Each
//! tap has a radial position and a per-channel weight. For every channel
//! the weights sum to one, so applying the kernel as a blur conserves
//! energy.
//!
//! # GPU Layout
//!
//! [`Kernel::to_vec4`] packs every tap as `(w.r, w.g, w.b, position)`,
//! the layout a blur shader reads from a constant buffer.

use std::ops::Index;

use serde::{Deserialize, Serialize, Serializer};
use sss_math::glam::Vec4;
use sss_math::Vec3;

/// Number of taps in a kernel. Must be odd.
pub const NUM_SAMPLES: usize = 7;

/// One kernel tap.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KernelSample {
    /// Per-channel contribution multiplier.
    pub weight: Vec3,
    /// Radial offset, in the same units as the profile's standard deviations.
    pub position: f32,
}

impl KernelSample {
    /// Packs the tap as `(w.r, w.g, w.b, position)`.
    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        self.weight.extend(self.position)
    }
}

/// Importance-sampled scattering kernel with `N` taps.
///
/// `N` defaults to [`NUM_SAMPLES`]. Instantiating synthesis with an even
/// `N` fails to compile.
///
/// Samples are ordered by non-decreasing position. The center sample
/// (index `N / 2`) sits at the median of the sampling distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel<const N: usize = NUM_SAMPLES> {
    pub(crate) samples: [KernelSample; N],
}

impl<const N: usize> Kernel<N> {
    /// Post-monomorphization check that the sample count is odd.
    pub(crate) const ODD_SAMPLE_COUNT: () = assert!(N % 2 == 1, "kernel sample count must be odd");

    /// Number of taps.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false; kernels have an odd, hence non-zero, tap count.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// All taps, ordered by position.
    #[inline]
    pub fn samples(&self) -> &[KernelSample; N] {
        &self.samples
    }

    /// Iterates over the taps.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, KernelSample> {
        self.samples.iter()
    }

    /// The middle tap.
    #[inline]
    pub fn center(&self) -> &KernelSample {
        &self.samples[N / 2]
    }

    /// Tap positions in order.
    pub fn positions(&self) -> [f32; N] {
        self.samples.map(|s| s.position)
    }

    /// Per-channel sums of the tap weights.
    ///
    /// Equals `(1, 1, 1)` up to floating-point accumulation error.
    pub fn channel_sums(&self) -> Vec3 {
        self.samples
            .iter()
            .fold(Vec3::ZERO, |sum, s| sum + s.weight)
    }

    /// Packs all taps as `(w.r, w.g, w.b, position)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sss_kernel::{compute_kernel, Profile};
    ///
    /// let kernel = compute_kernel(&Profile::default()).unwrap();
    /// let packed = kernel.to_vec4();
    /// assert_eq!(packed.len(), kernel.len());
    /// assert_eq!(packed[3].w, kernel.center().position);
    /// ```
    pub fn to_vec4(&self) -> Vec<Vec4> {
        self.samples.iter().map(|s| s.to_vec4()).collect()
    }
}

impl<const N: usize> Index<usize> for Kernel<N> {
    type Output = KernelSample;

    #[inline]
    fn index(&self, i: usize) -> &KernelSample {
        &self.samples[i]
    }
}

impl<'a, const N: usize> IntoIterator for &'a Kernel<N> {
    type Item = &'a KernelSample;
    type IntoIter = std::slice::Iter<'a, KernelSample>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

// Serialized as a plain sequence of taps. Kernels are derived values and
// are never deserialized; profiles are persisted instead.
impl<const N: usize> Serialize for Kernel<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.samples.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Kernel<3> {
        Kernel {
            samples: [
                KernelSample { weight: Vec3::new(0.25, 0.2, 0.1), position: -1.0 },
                KernelSample { weight: Vec3::new(0.5, 0.6, 0.8), position: 0.0 },
                KernelSample { weight: Vec3::new(0.25, 0.2, 0.1), position: 1.0 },
            ],
        }
    }

    #[test]
    fn test_accessors() {
        let k = ramp();
        assert_eq!(k.len(), 3);
        assert!(!k.is_empty());
        assert_eq!(k.center().position, 0.0);
        assert_eq!(k.positions(), [-1.0, 0.0, 1.0]);
        assert_eq!(k[2].position, 1.0);
        assert_eq!((&k).into_iter().count(), 3);
    }

    #[test]
    fn test_channel_sums() {
        let sums = ramp().channel_sums();
        assert!((sums.r() - 1.0).abs() < 1e-6);
        assert!((sums.g() - 1.0).abs() < 1e-6);
        assert!((sums.b() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_to_vec4() {
        let packed = ramp().to_vec4();
        assert_eq!(packed[0], Vec4::new(0.25, 0.2, 0.1, -1.0));
        assert_eq!(packed[1].w, 0.0);
    }

    #[test]
    fn test_serialize_as_sequence() {
        let json = serde_json::to_value(ramp()).unwrap();
        let taps = json.as_array().unwrap();
        assert_eq!(taps.len(), 3);
        assert_eq!(taps[0]["position"], -1.0);
        assert_eq!(taps[1]["weight"][2].as_f64().unwrap() as f32, 0.8);
    }
}
