// src/exec/backend.rs

//! Pluggable executor abstraction.
//!
//! The facade talks to a `CommandExecutor` instead of spawning processes
//! itself. This makes it easy to swap in a fake executor in tests while
//! keeping the production implementation here.
//!
//! - `SystemCommandExecutor` is the implementation used by `cmm`. It runs
//!   the configured executable once per call and captures its stdout.
//! - Tests can provide their own `CommandExecutor` that, for example,
//!   records the argument lists and echoes them back.

use std::fmt::Debug;
use std::process::{Command, Stdio};
use std::sync::Arc;

use tracing::debug;

use crate::errors::{CmmError, Result};

/// Trait abstracting how a ControlMyMonitor command line is run.
pub trait CommandExecutor: Send + Sync + Debug {
    /// Run the external tool with `args` and return everything it wrote to
    /// stdout.
    ///
    /// Fails when the process cannot be started or exits unsuccessfully.
    fn execute(&self, args: &[String]) -> Result<String>;
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &E {
    fn execute(&self, args: &[String]) -> Result<String> {
        (**self).execute(args)
    }
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for Box<E> {
    fn execute(&self, args: &[String]) -> Result<String> {
        (**self).execute(args)
    }
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for Arc<E> {
    fn execute(&self, args: &[String]) -> Result<String> {
        (**self).execute(args)
    }
}

/// Real executor used in production.
///
/// Spawns `executable` with the given arguments, inheriting the parent
/// environment. Stderr goes to the null device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemCommandExecutor {
    executable: String,
}

impl SystemCommandExecutor {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }
}

impl CommandExecutor for SystemCommandExecutor {
    fn execute(&self, args: &[String]) -> Result<String> {
        debug!(executable = %self.executable, ?args, "spawning process");

        let output = Command::new(&self.executable)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| CmmError::Spawn {
                executable: self.executable.clone(),
                source,
            })?;

        debug!(
            executable = %self.executable,
            exit_code = ?output.status.code(),
            success = output.status.success(),
            "process exited"
        );

        if !output.status.success() {
            return Err(CmmError::CommandFailed {
                executable: self.executable.clone(),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
