// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::command::ExportFormat;

/// Command-line arguments for `cmm`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cmm",
    version,
    about = "Control monitor settings over DDC/CI through ControlMyMonitor.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Cmm.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// ControlMyMonitor executable to run; must be on PATH.
    #[arg(long, value_name = "NAME", env = "CMM_EXECUTABLE", global = true)]
    pub executable: Option<String>,

    /// Monitor to target (e.g. `\\.\DISPLAY1\Monitor0`, `Primary`).
    ///
    /// Falls back to `monitor` in the config file.
    #[arg(short, long, value_name = "ID", global = true)]
    pub monitor: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CMM_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Set a VCP feature to a value.
    SetValue { code: String, value: String },

    /// Set a VCP feature only if it differs from the current value.
    SetValueIfNeeded { code: String, value: String },

    /// Add a (possibly negative) delta to a VCP feature.
    ChangeValue {
        code: String,
        #[arg(allow_hyphen_values = true)]
        delta: String,
    },

    /// Cycle a VCP feature through the given values.
    SwitchValue {
        code: String,
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,
    },

    /// Print the value the tool reports for a VCP feature.
    GetValue { code: String },

    TurnOff,

    TurnOn,

    /// Turn the monitor off if it is on, and on if it is off.
    SwitchOffOn,

    /// Save all writable VCP features to a file.
    SaveConfig { file: String },

    /// Restore VCP features from a file written by `save-config`.
    LoadConfig { file: String },

    /// Export the monitor's VCP features.
    Export {
        /// text, tab, comma, html, verbose-html, xml or json.
        format: ExportFormat,
        file: Option<String>,
        /// Print the export instead of writing FILE.
        #[arg(long)]
        stdout: bool,
    },

    /// Export the list of attached monitors.
    ExportMonitors {
        file: Option<String>,
        /// Print the export instead of writing FILE.
        #[arg(long)]
        stdout: bool,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "cmm", "set-value", "10", "50", "--monitor", "Primary", "--log-level", "debug",
        ])
        .unwrap();

        assert_eq!(args.monitor.as_deref(), Some("Primary"));
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
        match args.command {
            Command::SetValue { code, value } => {
                assert_eq!(code, "10");
                assert_eq!(value, "50");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn negative_delta_is_a_value() {
        let args = CliArgs::try_parse_from(["cmm", "change-value", "10", "-5"]).unwrap();
        match args.command {
            Command::ChangeValue { delta, .. } => assert_eq!(delta, "-5"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn switch_value_needs_at_least_one_value() {
        assert!(CliArgs::try_parse_from(["cmm", "switch-value", "60"]).is_err());

        let args = CliArgs::try_parse_from(["cmm", "switch-value", "60", "15", "17"]).unwrap();
        match args.command {
            Command::SwitchValue { code, values } => {
                assert_eq!(code, "60");
                assert_eq!(values, ["15", "17"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn export_format_uses_from_str() {
        let args = CliArgs::try_parse_from(["cmm", "export", "verbose-html", "--stdout"]).unwrap();
        match args.command {
            Command::Export { format, file, stdout } => {
                assert_eq!(format, ExportFormat::VerboseHtml);
                assert_eq!(file, None);
                assert!(stdout);
            }
            other => panic!("unexpected command {other:?}"),
        }

        assert!(CliArgs::try_parse_from(["cmm", "export", "yaml", "out.yaml"]).is_err());
    }
}
