// src/lib.rs

//! Drive NirSoft ControlMyMonitor from Rust.
//!
//! [`ControlMyMonitor`] turns typed method calls into ControlMyMonitor
//! command lines and runs them through a [`CommandExecutor`]:
//!
//! ```no_run
//! use cmm::ControlMyMonitor;
//!
//! # fn main() -> cmm::errors::Result<()> {
//! let cmm = ControlMyMonitor::new("ControlMyMonitor.exe")?;
//! cmm.set_value("Primary", "10", "70")?;
//! let monitors = cmm.s_monitors("", true)?;
//! # let _ = monitors;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod monitor;
pub mod resolve;

pub use command::{ExportFormat, Invocation, Operation};
pub use errors::{CmmError, Result};
pub use exec::{CommandExecutor, SystemCommandExecutor};
pub use monitor::ControlMyMonitor;

use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::config::ConfigFile;
use crate::fs::RealFileSystem;

/// High-level entry point used by `main.rs`.
///
/// Loads config, resolves the executable and runs one subcommand. Captured
/// output (if any) is written to stdout unchanged.
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let cfg = config::load_optional(&RealFileSystem, args.config.as_deref())?;
    let executable = cfg.resolve_executable(args.executable.as_deref());
    debug!(%executable, "using ControlMyMonitor executable");

    let cmm = ControlMyMonitor::new(executable)?;
    if let Some(output) = dispatch(&cmm, &cfg, args.monitor.as_deref(), &args.command)? {
        print!("{output}");
    }
    Ok(())
}

/// Run `command` against `cmm`, returning the text to print, if any.
pub fn dispatch<E: CommandExecutor>(
    cmm: &ControlMyMonitor<E>,
    cfg: &ConfigFile,
    monitor: Option<&str>,
    command: &Command,
) -> Result<Option<String>> {
    let target_monitor = || {
        cfg.resolve_monitor(monitor).ok_or_else(|| {
            CmmError::ConfigError(
                "no monitor given: pass --monitor or set `monitor` in the config file".to_string(),
            )
        })
    };

    match command {
        Command::SetValue { code, value } => {
            cmm.set_value(target_monitor()?, code, value).map(|()| None)
        }
        Command::SetValueIfNeeded { code, value } => {
            cmm.set_value_if_needed(target_monitor()?, code, value).map(|()| None)
        }
        Command::ChangeValue { code, delta } => {
            cmm.change_value(target_monitor()?, code, delta).map(|()| None)
        }
        Command::SwitchValue { code, values } => cmm
            .switch_value(target_monitor()?, code, values.iter().map(String::as_str))
            .map(|()| None),
        Command::GetValue { code } => cmm.get_value(target_monitor()?, code).map(Some),
        Command::TurnOff => cmm.turn_off(target_monitor()?).map(|()| None),
        Command::TurnOn => cmm.turn_on(target_monitor()?).map(|()| None),
        Command::SwitchOffOn => cmm.switch_off_on(target_monitor()?).map(|()| None),
        Command::SaveConfig { file } => cmm.save_config(file, target_monitor()?).map(|()| None),
        Command::LoadConfig { file } => cmm.load_config(file, target_monitor()?).map(|()| None),
        Command::Export { format, file, stdout } => {
            let file = export_target(file.as_deref(), *stdout)?;
            cmm.export(*format, file, target_monitor()?, *stdout)
        }
        Command::ExportMonitors { file, stdout } => {
            let file = export_target(file.as_deref(), *stdout)?;
            cmm.s_monitors(file, *stdout)
        }
    }
}

/// An export needs either a file to write or `--stdout`.
fn export_target(file: Option<&str>, stdout: bool) -> Result<&str> {
    match (file, stdout) {
        (Some(file), _) => Ok(file),
        (None, true) => Ok(""),
        (None, false) => Err(CmmError::ConfigError(
            "export needs a FILE argument or --stdout".to_string(),
        )),
    }
}
