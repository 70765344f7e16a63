//! Profile set configuration files.
//!
//! Profile sets are stored as YAML (or JSON, chosen by file extension):
//!
//! ```yaml
//! bilateral_scale: 0.1
//! profiles:
//!   - name: skin
//!     std_dev1: [0.3, 0.2, 0.1]
//!     std_dev2: [1.0, 0.8, 0.5]
//!     lerp_weight: 0.5
//! ```
//!
//! Only profile parameters are persisted. Kernels are always recomputed
//! after loading, and loading always sanitizes.
//!
//! # Example
//!
//! ```rust
//! use sss_kernel::ProfileSet;
//!
//! let yaml = "
//! profiles:
//!   - name: skin
//!     std_dev1: [0.3, 0.2, 0.1]
//!     std_dev2: [1.0, 0.8, 0.5]
//!     lerp_weight: 0.5
//! ";
//! let mut set = ProfileSet::from_yaml_str(yaml).unwrap();
//! assert_eq!(set.bilateral_scale, 0.1);
//! assert_eq!(set.kernels().unwrap().len(), 1);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sss_core::{SssError, SssResult};
use sss_math::Vec3;
use tracing::debug;

use crate::cache::CachedProfile;
use crate::profile::Profile;
use crate::profile_set::ProfileSet;
use crate::sanitize::DEFAULT_BILATERAL_SCALE;

/// One profile entry in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// First lobe standard deviations.
    pub std_dev1: Vec3,
    /// Second lobe standard deviations.
    pub std_dev2: Vec3,
    /// Mixing weight between the lobes.
    pub lerp_weight: f32,
}

impl ProfileConfig {
    /// Profile parameters of this entry.
    pub fn profile(&self) -> Profile {
        Profile::new(self.std_dev1, self.std_dev2, self.lerp_weight)
    }
}

/// Serialized form of a [`ProfileSet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSetConfig {
    /// Bilateral depth-weighting scale.
    #[serde(default = "default_bilateral_scale")]
    pub bilateral_scale: f32,
    /// Profile entries, in slot order.
    #[serde(default)]
    pub profiles: Vec<ProfileConfig>,
}

fn default_bilateral_scale() -> f32 {
    DEFAULT_BILATERAL_SCALE
}

impl ProfileSetConfig {
    /// Parses YAML text.
    pub fn from_yaml_str(yaml: &str) -> SssResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| SssError::parse("YAML", e))
    }

    /// Parses JSON text.
    pub fn from_json_str(json: &str) -> SssResult<Self> {
        serde_json::from_str(json).map_err(|e| SssError::parse("JSON", e))
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> SssResult<String> {
        serde_yaml::to_string(self).map_err(|e| SssError::parse("YAML", e))
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> SssResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SssError::parse("JSON", e))
    }

    /// Reads a config file. `.json` files parse as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> SssResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading profile config");
        let text = std::fs::read_to_string(path)?;
        if is_json(path) {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    /// Writes a config file, picking the format from the extension.
    pub fn write_file(&self, path: impl AsRef<Path>) -> SssResult<()> {
        let path = path.as_ref();
        let text = if is_json(path) {
            self.to_json_string()?
        } else {
            self.to_yaml_string()?
        };
        std::fs::write(path, text)?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

impl ProfileSet {
    /// Builds a sanitized set from a config.
    pub fn from_config(config: &ProfileSetConfig) -> Self {
        let profiles = config
            .profiles
            .iter()
            .map(|p| CachedProfile::named(p.name.clone(), p.profile()))
            .collect();
        let mut set = Self::from_parts(profiles, config.bilateral_scale);
        set.sanitize();
        set
    }

    /// Snapshot of the set's parameters.
    pub fn to_config(&self) -> ProfileSetConfig {
        ProfileSetConfig {
            bilateral_scale: self.bilateral_scale,
            profiles: self
                .iter()
                .map(|slot| {
                    let p = slot.profile();
                    ProfileConfig {
                        name: slot.name().to_string(),
                        std_dev1: p.std_dev1,
                        std_dev2: p.std_dev2,
                        lerp_weight: p.lerp_weight,
                    }
                })
                .collect(),
        }
    }

    /// Parses and sanitizes a YAML profile set.
    pub fn from_yaml_str(yaml: &str) -> SssResult<Self> {
        Ok(Self::from_config(&ProfileSetConfig::from_yaml_str(yaml)?))
    }

    /// Loads and sanitizes a profile set file.
    pub fn from_file(path: impl AsRef<Path>) -> SssResult<Self> {
        Ok(Self::from_config(&ProfileSetConfig::from_file(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKIN_YAML: &str = "
bilateral_scale: 0.25
profiles:
  - name: skin
    std_dev1: [0.3, 0.2, 0.1]
    std_dev2: [1.0, 0.8, 0.5]
    lerp_weight: 0.5
  - std_dev1: [1, 1, 1]
    std_dev2: [2, 2, 2]
    lerp_weight: 0
";

    #[test]
    fn test_parse_yaml() {
        let cfg = ProfileSetConfig::from_yaml_str(SKIN_YAML).unwrap();
        assert_eq!(cfg.bilateral_scale, 0.25);
        assert_eq!(cfg.profiles.len(), 2);
        assert_eq!(cfg.profiles[0].name, "skin");
        assert_eq!(cfg.profiles[0].std_dev1, Vec3::new(0.3, 0.2, 0.1));
        assert_eq!(cfg.profiles[1].name, "");
        assert_eq!(cfg.profiles[1].std_dev2, Vec3::splat(2.0));
    }

    #[test]
    fn test_defaults() {
        let cfg = ProfileSetConfig::from_yaml_str("profiles: []").unwrap();
        assert_eq!(cfg.bilateral_scale, DEFAULT_BILATERAL_SCALE);

        // Empty set is refilled on load
        let set = ProfileSet::from_config(&cfg);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_bad_yaml() {
        let err = ProfileSetConfig::from_yaml_str("profiles: [{ std_dev1: [1, 2] }]").unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().starts_with("YAML"));
    }

    #[test]
    fn test_load_sanitizes() {
        let yaml = "
profiles:
  - name: hot
    std_dev1: [0.0, 0.3, 0.3]
    std_dev2: [3.0, 1.0, 1.0]
    lerp_weight: 1.5
";
        let set = ProfileSet::from_yaml_str(yaml).unwrap();
        let p = set.get(0).unwrap().profile();
        assert!(p.validate().is_ok());
        assert_eq!(p.lerp_weight, 1.0);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let set = ProfileSet::from_yaml_str(SKIN_YAML).unwrap();
        let text = set.to_config().to_yaml_string().unwrap();
        let again = ProfileSet::from_yaml_str(&text).unwrap();
        assert_eq!(again.to_config(), set.to_config());
    }

    #[test]
    fn test_json() {
        let cfg = ProfileSetConfig::from_yaml_str(SKIN_YAML).unwrap();
        let json = cfg.to_json_string().unwrap();
        assert!(json.contains("\"std_dev1\""));
        assert_eq!(ProfileSetConfig::from_json_str(&json).unwrap(), cfg);
    }

    #[test]
    fn test_file_io() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = ProfileSetConfig::from_yaml_str(SKIN_YAML).unwrap();

        for name in ["set.yaml", "set.json"] {
            let path = dir.path().join(name);
            cfg.write_file(&path).unwrap();
            assert_eq!(ProfileSetConfig::from_file(&path).unwrap(), cfg);
        }

        let missing = ProfileSet::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, SssError::Io(_)));
    }
}
