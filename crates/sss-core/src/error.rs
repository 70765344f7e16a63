//! Error types for kernel synthesis and profile handling.
//!
//! This module provides the unified error type for every crate in the
//! SSS-RS workspace.
//!
//! # Overview
//!
//! The [`SssError`] enum covers all failure modes that can occur during:
//! - Kernel synthesis (parameter validation)
//! - Profile set access (index lookups)
//! - Configuration loading (file I/O, YAML/JSON parsing)
//!
//! Kernel synthesis itself has exactly one failure class,
//! [`InvalidParameter`](SssError::InvalidParameter). There is no partial
//! success: a kernel is either complete and normalized, or an error.
//!
//! # Usage
//!
//! ```rust
//! use sss_core::{SssError, SssResult};
//!
//! fn check_std_dev(value: f32) -> SssResult<f32> {
//!     if !(value.is_finite() && value > 0.0) {
//!         return Err(SssError::invalid_parameter(
//!             "std_dev",
//!             format!("must be finite and > 0, got {value}"),
//!         ));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(check_std_dev(0.3).is_ok());
//! assert!(check_std_dev(0.0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `sss-kernel` - Synthesis, cache, profile set, config loading
//! - `sss-cli` - Wrapped in `anyhow` contexts

use thiserror::Error;

/// Result type alias using [`SssError`] as the error type.
pub type SssResult<T> = std::result::Result<T, SssError>;

/// Errors that can occur while synthesizing kernels or loading profiles.
///
/// # Categories
///
/// - **Parameter errors**: [`InvalidParameter`](SssError::InvalidParameter)
/// - **Lookup errors**: [`ProfileIndex`](SssError::ProfileIndex)
/// - **Config errors**: [`Io`](SssError::Io), [`Parse`](SssError::Parse)
#[derive(Debug, Error)]
pub enum SssError {
    /// A profile parameter is outside its valid domain.
    ///
    /// Returned for non-positive or non-finite standard deviations and for
    /// a lerp weight outside `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sss_core::SssError;
    ///
    /// let err = SssError::invalid_parameter("lerp_weight", "1.5 is outside [0, 1]");
    /// assert!(err.to_string().contains("lerp_weight"));
    /// assert!(err.is_parameter_error());
    /// ```
    #[error("invalid parameter '{param}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        param: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Profile index is outside the profile set.
    #[error("profile index {index} out of range for set of {len}")]
    ProfileIndex {
        /// Requested index
        index: usize,
        /// Number of profiles in the set
        len: usize,
    },

    /// I/O error while reading or writing a profile configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration text could not be parsed or serialized.
    #[error("{format} error: {message}")]
    Parse {
        /// Format name ("YAML", "JSON")
        format: &'static str,
        /// Parser message
        message: String,
    },

    /// Generic error with custom message.
    ///
    /// Prefer specific error variants when possible.
    #[error("{0}")]
    Other(String),
}

impl SssError {
    /// Creates an [`SssError::InvalidParameter`] error.
    ///
    /// # Arguments
    ///
    /// * `param` - Parameter name (e.g. `"std_dev1.r"`)
    /// * `reason` - Human readable reason
    #[inline]
    pub fn invalid_parameter(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`SssError::ProfileIndex`] error.
    #[inline]
    pub fn profile_index(index: usize, len: usize) -> Self {
        Self::ProfileIndex { index, len }
    }

    /// Creates an [`SssError::Parse`] error.
    #[inline]
    pub fn parse(format: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            format,
            message: message.to_string(),
        }
    }

    /// Creates an [`SssError::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a parameter validation error.
    #[inline]
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns `true` if this is a configuration (I/O or parse) error.
    #[inline]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter() {
        let err = SssError::invalid_parameter("std_dev1.g", "must be > 0, got -0.5");
        let msg = err.to_string();
        assert!(msg.contains("std_dev1.g"));
        assert!(msg.contains("-0.5"));
        assert!(err.is_parameter_error());
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_profile_index() {
        let err = SssError::profile_index(9, 8);
        let msg = err.to_string();
        assert!(msg.contains('9'));
        assert!(msg.contains('8'));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SssError = io_err.into();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_parse_error() {
        let err = SssError::parse("YAML", "unexpected end of stream");
        assert_eq!(err.to_string(), "YAML error: unexpected end of stream");
        assert!(err.is_config_error());
    }
}
