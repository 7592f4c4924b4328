// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::fs::FileSystem;

/// Load a configuration file and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// the checked `ConfigFile`.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs.read_to_string(path.as_ref())?;
    let config: RawConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(fs, &path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load the config the CLI should use.
///
/// - An explicit path must exist and parse.
/// - Without one, [`default_config_path`] is used if it is a file, and an
///   empty config otherwise.
pub fn load_optional(fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return load_and_validate(fs, path);
    }

    let default = default_config_path();
    if fs.is_file(&default) {
        debug!(path = %default.display(), "loading default config file");
        load_and_validate(fs, &default)
    } else {
        Ok(ConfigFile::default())
    }
}

/// `Cmm.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Cmm.toml")
}
