use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{GardenError, Result};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// File holding the persisted garden snapshot
    pub garden_file: PathBuf,

    /// Directory where SVG exports are written
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let base = ProjectDirs::from("", "", "mindgarden")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        Config {
            garden_file: base.join("garden.json"),
            export_dir: base.join("exports"),
        }
    }
}

impl Config {
    /// Loads configuration from the given file, or the defaults when no
    /// path is provided.
    ///
    /// Unlike the garden mirror, a broken config file is a hard error: a
    /// config silently replaced by defaults would point the store at the
    /// wrong file and hide the user's garden.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let raw = fs::read_to_string(path).map_err(|e| GardenError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })?;

        serde_json::from_str(&raw).map_err(|e| GardenError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_when_no_path_is_given() {
        let config = Config::load(None).expect("defaults");
        assert!(config.garden_file.ends_with("garden.json"));
    }

    #[test]
    fn loads_from_a_json_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"garden_file": "/tmp/g.json", "export_dir": "/tmp/out"}"#,
        )
        .expect("write config");

        let config = Config::load(Some(&path)).expect("load");
        assert_eq!(config.garden_file, PathBuf::from("/tmp/g.json"));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn broken_config_is_a_hard_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").expect("write config");

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn missing_config_file_is_a_hard_error() {
        let dir = tempdir().expect("tempdir");
        assert!(Config::load(Some(&dir.path().join("absent.json"))).is_err());
    }
}
