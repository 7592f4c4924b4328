use std::sync::{Arc, Mutex};

use cmm::errors::{CmmError, Result};
use cmm::exec::CommandExecutor;

/// Shared log of every argument list an executor received.
pub type CallLog = Arc<Mutex<Vec<Vec<String>>>>;

/// A fake executor that:
/// - records every argument list it is asked to run
/// - "prints" the arguments joined by single spaces.
#[derive(Debug, Clone, Default)]
pub struct EchoExecutor {
    calls: CallLog,
}

impl EchoExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded call; panics if there were zero or several.
    pub fn only_call(&self) -> Vec<String> {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

impl CommandExecutor for EchoExecutor {
    fn execute(&self, args: &[String]) -> Result<String> {
        self.calls.lock().unwrap().push(args.to_vec());
        Ok(args.join(" "))
    }
}

/// What a [`ScriptedExecutor`] answers with.
#[derive(Debug, Clone)]
pub enum Script {
    /// Succeed with this stdout.
    Output(String),
    /// Fail as if the tool exited with this code.
    ExitCode(i32),
}

/// A fake executor that records calls and answers every one of them with
/// the same canned [`Script`].
#[derive(Debug, Clone)]
pub struct ScriptedExecutor {
    script: Script,
    calls: CallLog,
}

impl ScriptedExecutor {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: CallLog::default(),
        }
    }

    pub fn output(stdout: impl Into<String>) -> Self {
        Self::new(Script::Output(stdout.into()))
    }

    pub fn failing(code: i32) -> Self {
        Self::new(Script::ExitCode(code))
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn execute(&self, args: &[String]) -> Result<String> {
        self.calls.lock().unwrap().push(args.to_vec());
        match &self.script {
            Script::Output(stdout) => Ok(stdout.clone()),
            Script::ExitCode(code) => Err(CmmError::CommandFailed {
                executable: "ControlMyMonitor.exe".to_string(),
                code: Some(*code),
            }),
        }
    }
}
