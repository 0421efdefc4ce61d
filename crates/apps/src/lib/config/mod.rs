//! Client configuration

use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use nebulith_governance::parameters::GovernanceParameters;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli;

/// Base directory contains the client configuration.
pub const DEFAULT_BASE_DIR: &str = ".nebulith";
/// The client configuration file. Nested in the base dir.
pub const FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error while reading config: {0}")]
    ReadError(config::ConfigError),
    #[error("Error while deserializing config: {0}")]
    DeserializationError(config::ConfigError),
    #[error("Error while serializing to toml: {0}")]
    TomlError(toml::ser::Error),
    #[error("Error while writing config: {0}")]
    WriteError(std::io::Error),
    #[error("A config file already exists in {0}")]
    AlreadyExistingConfig(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to the governance snapshot file read by the client. When unset,
    /// the built-in demo snapshot is used.
    pub snapshot: Option<PathBuf>,
    /// Governance limits applied when validating drafts
    pub governance: GovernanceParameters,
}

impl Config {
    /// Load config from the expected path in the `base_dir` or generate a new
    /// one if it doesn't exist. Terminates with an error if the config
    /// loading fails.
    pub fn load(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        match Self::read(base_dir) {
            Ok(config) => config,
            Err(err) => {
                eprintln!(
                    "Tried to read config in {} but failed with: {}",
                    base_dir.display(),
                    err
                );
                cli::safe_exit(1)
            }
        }
    }

    /// Read the config from a file, or generate a default one and write it to
    /// a file if it doesn't already exist. Keys that are expected but not set
    /// in the config file are filled in with default values.
    pub fn read(base_dir: &Path) -> Result<Self> {
        let file_path = Self::file_path(base_dir);
        let file_name = file_path.to_str().expect("Expected UTF-8 file path");
        if !file_path.exists() {
            return Self::generate(base_dir, true);
        };
        let defaults = config::Config::try_from(&Self::default())
            .map_err(Error::ReadError)?;
        let builder = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(file_name))
            .add_source(
                config::Environment::with_prefix("NEBULITH").separator("__"),
            );

        let config = builder.build().map_err(Error::ReadError)?;
        config
            .try_deserialize()
            .map_err(Error::DeserializationError)
    }

    /// Generate configuration and write it to a file.
    pub fn generate(base_dir: &Path, replace: bool) -> Result<Self> {
        let config = Config::default();
        config.write(base_dir, replace)?;
        Ok(config)
    }

    /// Write configuration to a file.
    pub fn write(&self, base_dir: &Path, replace: bool) -> Result<()> {
        let file_path = Self::file_path(base_dir);
        let file_dir = file_path.parent().unwrap();
        create_dir_all(file_dir).map_err(Error::WriteError)?;
        if file_path.exists() && !replace {
            Err(Error::AlreadyExistingConfig(file_path))
        } else {
            let mut file =
                File::create(file_path).map_err(Error::WriteError)?;
            let toml = toml::ser::to_string(&self).map_err(|err| {
                if let toml::ser::Error::ValueAfterTable = err {
                    tracing::error!("{}", VALUE_AFTER_TABLE_ERROR_MSG);
                }
                Error::TomlError(err)
            })?;
            file.write_all(toml.as_bytes()).map_err(Error::WriteError)
        }
    }

    /// Get the file path to the config
    pub fn file_path(base_dir: impl AsRef<Path>) -> PathBuf {
        base_dir.as_ref().join(FILENAME)
    }
}

pub fn get_default_nebulith_folder() -> PathBuf {
    if let Some(project_dir) = ProjectDirs::from("", "", "Nebulith") {
        project_dir.data_local_dir().to_path_buf()
    } else {
        DEFAULT_BASE_DIR.into()
    }
}

pub const VALUE_AFTER_TABLE_ERROR_MSG: &str = r#"
Error while serializing to toml. It means that some nested structure is followed
 by simple fields.
This fails:
    struct Nested{
       i:int
    }

    struct Broken{
       nested:Nested,
       simple:int
    }
And this is correct
    struct Nested{
       i:int
    }

    struct Correct{
       simple:int
       nested:Nested,
    }
"#;

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let base_dir = tempfile::tempdir().expect("Test failed");
        let config = Config {
            snapshot: Some(PathBuf::from("snapshots/devnet.json")),
            governance: Default::default(),
        };
        config.write(base_dir.path(), false).expect("Test failed");

        let read = Config::read(base_dir.path()).expect("Test failed");
        assert_eq!(read.snapshot, config.snapshot);
        assert_eq!(read.governance, config.governance);
    }

    #[test]
    fn test_read_generates_default_config() {
        let base_dir = tempfile::tempdir().expect("Test failed");
        let config = Config::read(base_dir.path()).expect("Test failed");
        assert_eq!(config.snapshot, None);
        assert!(Config::file_path(base_dir.path()).exists());
    }

    #[test]
    fn test_write_does_not_replace_existing_config() {
        let base_dir = tempfile::tempdir().expect("Test failed");
        let config = Config::default();
        config.write(base_dir.path(), false).expect("Test failed");
        assert_matches!(
            config.write(base_dir.path(), false),
            Err(Error::AlreadyExistingConfig(_))
        );
    }
}
