use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "CHESS_RULES_CONFIG";

/// Engine behaviour switches.
///
/// Missing fields take their default, so `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reject moves by the side that did not make the opposite move last.
    ///
    /// Off by default: the engine itself only judges legality of the move it is given.
    pub enforce_turn_order: bool,
}

impl EngineConfig {
    pub fn with_enforce_turn_order(mut self, enabled: bool) -> Self {
        self.enforce_turn_order = enabled;
        self
    }

    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text)
    }

    /// Load from the file named by [`CONFIG_ENV`], or the default if it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(p) => Self::load(&PathBuf::from(p)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = EngineConfig::from_json(Path::new("inline"), "{}").unwrap();
        assert_eq!(cfg, EngineConfig::default());
        assert!(!cfg.enforce_turn_order);
    }

    #[test]
    fn turn_order_can_be_enabled() {
        let cfg =
            EngineConfig::from_json(Path::new("inline"), r#"{"enforce_turn_order": true}"#).unwrap();
        assert!(cfg.enforce_turn_order);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = EngineConfig::from_json(Path::new("bad.json"), "{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = EngineConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
