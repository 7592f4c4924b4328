// src/command/mod.rs

//! Command-line construction for ControlMyMonitor.
//!
//! - [`operation`] holds the token table ([`Operation`]) and the export
//!   formats.
//! - [`invocation`] builds the ordered argument list for one run, including
//!   the content-return rewrite used by export operations.

pub mod invocation;
pub mod operation;

pub use invocation::{Invocation, PAGINATION, STDOUT_PLACEHOLDER};
pub use operation::{ExportFormat, Operation};
