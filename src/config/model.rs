// src/config/model.rs

use serde::Deserialize;

/// Executable used when neither the CLI, the environment nor the config
/// file names one.
pub const DEFAULT_EXECUTABLE: &str = "ControlMyMonitor.exe";

/// Config file as deserialized from TOML, before validation.
///
/// ```toml
/// executable = "ControlMyMonitor.exe"
/// monitor = "\\\\.\\DISPLAY1\\Monitor0"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub executable: Option<String>,

    /// Monitor targeted when a command does not name one.
    #[serde(default)]
    pub monitor: Option<String>,
}

/// Validated configuration. Construct via `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    executable: Option<String>,
    monitor: Option<String>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(executable: Option<String>, monitor: Option<String>) -> Self {
        Self { executable, monitor }
    }

    pub fn executable(&self) -> Option<&str> {
        self.executable.as_deref()
    }

    pub fn monitor(&self) -> Option<&str> {
        self.monitor.as_deref()
    }

    /// Pick the executable name: explicit override first, then the config
    /// file, then [`DEFAULT_EXECUTABLE`].
    pub fn resolve_executable(&self, override_name: Option<&str>) -> String {
        override_name
            .or(self.executable())
            .unwrap_or(DEFAULT_EXECUTABLE)
            .to_string()
    }

    /// Pick the monitor: explicit override first, then the config file.
    pub fn resolve_monitor<'a>(&'a self, override_monitor: Option<&'a str>) -> Option<&'a str> {
        override_monitor.or(self.monitor())
    }
}
