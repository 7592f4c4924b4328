// src/monitor.rs

//! The ControlMyMonitor facade.
//!
//! Every method builds one [`Invocation`] and hands it to the bound
//! [`CommandExecutor`]. Arguments are passed through as-is: feature codes,
//! values and monitor identifiers are validated by the external tool, not
//! here.

use crate::command::{ExportFormat, Invocation, Operation};
use crate::errors::Result;
use crate::exec::{CommandExecutor, SystemCommandExecutor};
use crate::fs::RealFileSystem;
use crate::resolve::locate_on_env_path;

/// Facade over one ControlMyMonitor executable.
#[derive(Debug, Clone)]
pub struct ControlMyMonitor<E = SystemCommandExecutor> {
    executor: E,
}

impl ControlMyMonitor<SystemCommandExecutor> {
    /// Validate `executable` against `PATH` and bind a facade to it.
    ///
    /// Fails with `EmptyExecutable` for an empty name and with
    /// `ExecutableNotFound` when no `PATH` directory contains it. No process
    /// is spawned here.
    pub fn new(executable: impl Into<String>) -> Result<Self> {
        let executable = executable.into();
        locate_on_env_path(&RealFileSystem, &executable)?;
        Ok(Self::with_executor(SystemCommandExecutor::new(executable)))
    }
}

impl<E: CommandExecutor> ControlMyMonitor<E> {
    /// Bind a facade to an arbitrary executor, skipping executable lookup.
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn run(&self, invocation: Invocation) -> Result<String> {
        self.executor.execute(invocation.as_args())
    }

    fn run_discarding(&self, invocation: Invocation) -> Result<()> {
        self.run(invocation).map(|_| ())
    }

    fn run_export(&self, invocation: Invocation, return_contents: bool) -> Result<Option<String>> {
        if return_contents {
            self.run(invocation.request_contents()).map(Some)
        } else {
            self.run_discarding(invocation).map(|()| None)
        }
    }

    pub fn set_value(&self, monitor: &str, vcp_code: &str, value: &str) -> Result<()> {
        self.run_discarding(
            Invocation::new(Operation::SetValue)
                .arg(monitor)
                .arg(vcp_code)
                .arg(value),
        )
    }

    /// Like [`set_value`](Self::set_value), but the tool skips the write when
    /// the monitor already reports `value`.
    pub fn set_value_if_needed(&self, monitor: &str, vcp_code: &str, value: &str) -> Result<()> {
        self.run_discarding(
            Invocation::new(Operation::SetValueIfNeeded)
                .arg(monitor)
                .arg(vcp_code)
                .arg(value),
        )
    }

    /// Add `delta` (may be negative) to the current value of `vcp_code`.
    pub fn change_value(&self, monitor: &str, vcp_code: &str, delta: &str) -> Result<()> {
        self.run_discarding(
            Invocation::new(Operation::ChangeValue)
                .arg(monitor)
                .arg(vcp_code)
                .arg(delta),
        )
    }

    /// Cycle `vcp_code` through `values`, in the order given.
    pub fn switch_value<I, S>(&self, monitor: &str, vcp_code: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run_discarding(
            Invocation::new(Operation::SwitchValue)
                .arg(monitor)
                .arg(vcp_code)
                .args(values),
        )
    }

    /// Query `vcp_code` and return the tool's stdout verbatim.
    pub fn get_value(&self, monitor: &str, vcp_code: &str) -> Result<String> {
        self.run(Invocation::new(Operation::GetValue).arg(monitor).arg(vcp_code))
    }

    pub fn turn_off(&self, monitor: &str) -> Result<()> {
        self.run_discarding(Invocation::new(Operation::TurnOff).arg(monitor))
    }

    pub fn turn_on(&self, monitor: &str) -> Result<()> {
        self.run_discarding(Invocation::new(Operation::TurnOn).arg(monitor))
    }

    pub fn switch_off_on(&self, monitor: &str) -> Result<()> {
        self.run_discarding(Invocation::new(Operation::SwitchOffOn).arg(monitor))
    }

    pub fn save_config(&self, filename: &str, monitor: &str) -> Result<()> {
        self.run_discarding(Invocation::new(Operation::SaveConfig).arg(filename).arg(monitor))
    }

    pub fn load_config(&self, filename: &str, monitor: &str) -> Result<()> {
        self.run_discarding(Invocation::new(Operation::LoadConfig).arg(filename).arg(monitor))
    }

    /// Export the VCP features of `monitor` in `format`.
    ///
    /// With `return_contents` the tool writes to stdout instead of
    /// `filename`, and the captured text is returned as `Some`. Otherwise the
    /// export goes to `filename` and `None` is returned.
    pub fn export(
        &self,
        format: ExportFormat,
        filename: &str,
        monitor: &str,
        return_contents: bool,
    ) -> Result<Option<String>> {
        self.run_export(
            Invocation::new(format.operation()).arg(filename).arg(monitor),
            return_contents,
        )
    }

    pub fn s_text(
        &self,
        filename: &str,
        monitor: &str,
        return_contents: bool,
    ) -> Result<Option<String>> {
        self.export(ExportFormat::Text, filename, monitor, return_contents)
    }

    pub fn s_tab(
        &self,
        filename: &str,
        monitor: &str,
        return_contents: bool,
    ) -> Result<Option<String>> {
        self.export(ExportFormat::Tab, filename, monitor, return_contents)
    }

    pub fn s_comma(
        &self,
        filename: &str,
        monitor: &str,
        return_contents: bool,
    ) -> Result<Option<String>> {
        self.export(ExportFormat::Comma, filename, monitor, return_contents)
    }

    pub fn s_html(
        &self,
        filename: &str,
        monitor: &str,
        return_contents: bool,
    ) -> Result<Option<String>> {
        self.export(ExportFormat::Html, filename, monitor, return_contents)
    }

    pub fn s_ver_html(
        &self,
        filename: &str,
        monitor: &str,
        return_contents: bool,
    ) -> Result<Option<String>> {
        self.export(ExportFormat::VerboseHtml, filename, monitor, return_contents)
    }

    pub fn s_xml(
        &self,
        filename: &str,
        monitor: &str,
        return_contents: bool,
    ) -> Result<Option<String>> {
        self.export(ExportFormat::Xml, filename, monitor, return_contents)
    }

    pub fn s_json(
        &self,
        filename: &str,
        monitor: &str,
        return_contents: bool,
    ) -> Result<Option<String>> {
        self.export(ExportFormat::Json, filename, monitor, return_contents)
    }

    /// Export the list of attached monitors.
    pub fn s_monitors(&self, filename: &str, return_contents: bool) -> Result<Option<String>> {
        self.run_export(
            Invocation::new(Operation::ExportMonitors).arg(filename),
            return_contents,
        )
    }
}
