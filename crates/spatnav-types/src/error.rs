//! Error types for spatnav.

use std::io;

/// Errors produced by the spatial navigation crates.
///
/// A search that finds nothing is not an error (it is `None`), and a
/// listener cancelling a navigation event is not an error either.
#[derive(Debug, thiserror::Error)]
pub enum SpatNavError {
    #[error("config error: {0}")]
    Config(String),

    #[error("fixture error: {0}")]
    Fixture(String),

    /// A navigation edge pointed at an element that is not part of the
    /// focusable snapshot the audit started from.
    #[error("stale snapshot: edge target {0} is not in the focusable set")]
    StaleSnapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SpatNavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = SpatNavError::Config("bad key mode".into());
        assert_eq!(format!("{e}"), "config error: bad key mode");
    }

    #[test]
    fn fixture_error_display() {
        let e = SpatNavError::Fixture("duplicate id `a`".into());
        assert_eq!(format!("{e}"), "fixture error: duplicate id `a`");
    }

    #[test]
    fn stale_snapshot_display() {
        let e = SpatNavError::StaleSnapshot("#gone".into());
        assert_eq!(
            format!("{e}"),
            "stale snapshot: edge target #gone is not in the focusable set"
        );
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: SpatNavError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: SpatNavError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: SpatNavError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(SpatNavError::Fixture("oops".into()));
        assert!(r.is_err());
    }
}
