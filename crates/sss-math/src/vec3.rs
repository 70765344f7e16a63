//! 3-component vector for per-channel (RGB) values.
//!
//! [`Vec3`] carries one value per color channel: standard deviations of a
//! scattering lobe, per-channel tap weights, running weight sums.
//! It converts to and from [`glam::Vec3`] for consumers that use glam.
//!
//! # Usage
//!
//! ```rust
//! use sss_math::Vec3;
//!
//! let std_dev = Vec3::new(0.3, 0.2, 0.1);
//! assert_eq!(std_dev.max_element(), 0.3);
//!
//! let widened = std_dev * 2.0;
//! assert_eq!(widened.r(), 0.6);
//! ```

use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Sub};

use crate::interp::clamp;

/// A 3D vector holding one `f32` per color channel.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`, the `r()`/`g()`/`b()` accessors, or index
/// `[0]`, `[1]`, `[2]`.
///
/// With the `serde` feature the vector (de)serializes as a plain
/// three-element array, e.g. `[0.3, 0.3, 0.3]`.
///
/// # Example
///
/// ```rust
/// use sss_math::Vec3;
///
/// let w = Vec3::new(0.5, 0.25, 0.125);
/// assert_eq!(w[1], 0.25);
/// assert_eq!(w.element_sum(), 0.875);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 3]", into = "[f32; 3]"))]
#[repr(C)]
pub struct Vec3 {
    /// X component (R channel)
    pub x: f32,
    /// Y component (G channel)
    pub y: f32,
    /// Z component (B channel)
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sss_math::Vec3;
    ///
    /// let gray = Vec3::splat(0.5);
    /// assert_eq!(gray, Vec3::new(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> f32 {
        self.x
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> f32 {
        self.y
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> f32 {
        self.z
    }

    /// Applies `f` to every component.
    ///
    /// ```rust
    /// use sss_math::Vec3;
    ///
    /// let v = Vec3::new(1.0, 4.0, 9.0).map(f32::sqrt);
    /// assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Combines two vectors component-wise with `f`.
    #[inline]
    pub fn zip_map(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// Clamps each component to `[min, max]`.
    ///
    /// NaN components map to the matching `min` component, as in
    /// [`clamp`](crate::clamp).
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            clamp(self.x, min.x, max.x),
            clamp(self.y, min.y, max.y),
            clamp(self.z, min.z, max.z),
        )
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(self) -> f32 {
        self.x.min(self.y).min(self.z)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> f32 {
        self.x.max(self.y).max(self.z)
    }

    /// Sum of all components.
    #[inline]
    pub fn element_sum(self) -> f32 {
        self.x + self.y + self.z
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Extends to a [`glam::Vec4`] with `w` as the fourth component.
    ///
    /// ```rust
    /// use sss_math::Vec3;
    ///
    /// let packed = Vec3::new(0.1, 0.2, 0.3).extend(-1.5);
    /// assert_eq!(packed.w, -1.5);
    /// ```
    #[inline]
    pub fn extend(self, w: f32) -> glam::Vec4 {
        self.to_glam().extend(w)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vec3 * Vec3 (component-wise)
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl MulAssign for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

// Vec3 / Vec3 (component-wise)
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}
