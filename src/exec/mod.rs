// src/exec/mod.rs

//! Process execution layer.
//!
//! [`backend`] provides the `CommandExecutor` trait and the concrete
//! `SystemCommandExecutor` that the facade uses in production, and which
//! tests can replace with a fake implementation.

pub mod backend;

pub use backend::{CommandExecutor, SystemCommandExecutor};
