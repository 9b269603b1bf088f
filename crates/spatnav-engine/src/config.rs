//! Navigator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spatnav_types::{KeyMode, Result, SpatNavError};

/// Tunables for one [`crate::SpatialNavigator`].
///
/// Every field has a default, so a TOML file only needs the keys it
/// changes:
///
/// ```toml
/// key_mode = "SHIFTARROW"
/// scroll_step = 60.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Which arrow presses trigger navigation.
    pub key_mode: KeyMode,
    /// Expose the read-only introspection API.
    pub experimental_apis: bool,

    // Scrolling
    /// Pixels scrolled per gesture.
    pub scroll_step: f64,
    /// Distance from the scroll limit still treated as "at the limit".
    pub scroll_tolerance: f64,

    // Distance scoring
    /// Weight of the orthogonal offset for left/right searches.
    pub orthogonal_weight_horizontal: f64,
    /// Weight of the orthogonal offset for up/down searches.
    pub orthogonal_weight_vertical: f64,
    /// Weight of the alignment bonus, subtracted in proportion to how
    /// much of the origin's cross-axis extent the candidate overlaps.
    pub align_weight: f64,

    /// Hit-test probes are inset from each corner by this fraction of the
    /// element's size.
    pub hit_test_inset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            key_mode: KeyMode::Arrow,
            experimental_apis: false,
            scroll_step: 40.0,
            scroll_tolerance: 1.0,
            orthogonal_weight_horizontal: 30.0,
            orthogonal_weight_vertical: 2.0,
            align_weight: 5.0,
            hit_test_inset: 0.1,
        }
    }
}

impl NavConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| SpatNavError::Config(format!("navigator config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
            .map_err(|e| SpatNavError::Config(format!("{}: {e}", path.display())))
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        let finite_non_negative = [
            ("scroll_step", self.scroll_step),
            ("scroll_tolerance", self.scroll_tolerance),
            ("orthogonal_weight_horizontal", self.orthogonal_weight_horizontal),
            ("orthogonal_weight_vertical", self.orthogonal_weight_vertical),
            ("align_weight", self.align_weight),
        ];
        for (name, value) in finite_non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SpatNavError::Config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if !(0.0..0.5).contains(&self.hit_test_inset) {
            return Err(SpatNavError::Config(format!(
                "hit_test_inset must be in [0, 0.5), got {}",
                self.hit_test_inset
            )));
        }
        Ok(())
    }

    /// Set the key mode from its script-facing name. Unknown names fall
    /// back to `ARROW`.
    pub fn set_key_mode_str(&mut self, mode: &str) {
        self.key_mode = KeyMode::from_str_lossy(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = NavConfig::default();
        assert_eq!(c.key_mode, KeyMode::Arrow);
        assert!(!c.experimental_apis);
        assert_eq!(c.scroll_step, 40.0);
        assert_eq!(c.orthogonal_weight_horizontal, 30.0);
        assert_eq!(c.orthogonal_weight_vertical, 2.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = NavConfig::from_toml_str("key_mode = \"SHIFTARROW\"\nscroll_step = 60.0").unwrap();
        assert_eq!(c.key_mode, KeyMode::ShiftArrow);
        assert_eq!(c.scroll_step, 60.0);
        assert_eq!(c.scroll_tolerance, 1.0);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(NavConfig::from_toml_str("").unwrap(), NavConfig::default());
    }

    #[test]
    fn unknown_key_rejected() {
        let err = NavConfig::from_toml_str("scrol_step = 3.0").unwrap_err();
        assert!(matches!(err, SpatNavError::Config(_)));
    }

    #[test]
    fn negative_weight_rejected() {
        let err = NavConfig::from_toml_str("align_weight = -1.0").unwrap_err();
        assert!(err.to_string().contains("align_weight"));
    }

    #[test]
    fn inset_range_checked() {
        let c = NavConfig {
            hit_test_inset: 0.5,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn key_mode_string_falls_back_to_arrow() {
        let mut c = NavConfig::default();
        c.set_key_mode_str("NONE");
        assert_eq!(c.key_mode, KeyMode::None);
        c.set_key_mode_str("sideways");
        assert_eq!(c.key_mode, KeyMode::Arrow);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spatnav.toml");
        std::fs::write(&path, "experimental_apis = true\n").unwrap();
        assert!(NavConfig::load(&path).unwrap().experimental_apis);
        assert!(matches!(
            NavConfig::load(dir.path().join("missing.toml")),
            Err(SpatNavError::Io(_))
        ));
    }
}
