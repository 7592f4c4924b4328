// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmmError {
    #[error("executable name cannot be empty")]
    EmptyExecutable,

    #[error("executable '{0}' not found in any PATH directory")]
    ExecutableNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("failed to start '{executable}': {source}")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{executable}' exited with {}", exit_description(.code))]
    CommandFailed {
        executable: String,
        code: Option<i32>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CmmError {
    /// True for errors raised while building a facade or loading config,
    /// as opposed to errors from running the external tool.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CmmError::EmptyExecutable
                | CmmError::ExecutableNotFound(_)
                | CmmError::ConfigError(_)
                | CmmError::IoError(_)
                | CmmError::TomlError(_)
        )
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, CmmError>;
