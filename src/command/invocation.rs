// src/command/invocation.rs

use super::Operation;

/// Stand-in filename that makes ControlMyMonitor write an export to its
/// standard output instead of a file.
pub const STDOUT_PLACEHOLDER: &str = "\"\"";

/// Trailing tokens appended in content-return mode.
pub const PAGINATION: [&str; 2] = ["|", "more"];

/// Ordered argument list for a single ControlMyMonitor run.
///
/// The operation token is always element 0. Built fresh for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    operation: Operation,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            args: vec![operation.token().to_string()],
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Switch an export invocation to content-return mode.
    ///
    /// The filename slot (index 1) is overwritten with [`STDOUT_PLACEHOLDER`],
    /// never removed, and [`PAGINATION`] is appended after every other
    /// argument.
    pub fn request_contents(mut self) -> Self {
        debug_assert!(self.operation.is_export());
        match self.args.get_mut(1) {
            Some(filename) => *filename = STDOUT_PLACEHOLDER.to_string(),
            None => self.args.push(STDOUT_PLACEHOLDER.to_string()),
        }
        self.args.extend(PAGINATION.iter().map(|s| s.to_string()));
        self
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn as_args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}
