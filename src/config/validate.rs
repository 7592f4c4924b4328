// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{CmmError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = CmmError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.executable, raw.monitor))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_not_blank("executable", cfg.executable.as_deref())?;
    ensure_not_blank("monitor", cfg.monitor.as_deref())?;
    Ok(())
}

fn ensure_not_blank(key: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if v.trim().is_empty() => Err(CmmError::ConfigError(format!(
            "`{key}` must not be empty when set"
        ))),
        _ => Ok(()),
    }
}
