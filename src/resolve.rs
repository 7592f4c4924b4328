// src/resolve.rs

//! Locating the external executable on the search path.
//!
//! Lookup is a plain existence probe of `<dir>/<name>` for every directory
//! in the search path, in order. Nothing is executed, and no extension
//! guessing is done: the name must match a filesystem entry exactly. An
//! absolute name is nested under each directory rather than replacing it.

use std::env;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use crate::errors::{CmmError, Result};
use crate::fs::FileSystem;

/// Environment variable holding the executable search path.
pub const SEARCH_PATH_VAR: &str = "PATH";

/// Validate `executable` and return the first search-path entry it exists in.
///
/// - Empty names fail with [`CmmError::EmptyExecutable`].
/// - Names found in no directory fail with [`CmmError::ExecutableNotFound`].
pub fn locate_executable(
    fs: &dyn FileSystem,
    search_path: &OsStr,
    executable: &str,
) -> Result<PathBuf> {
    if executable.is_empty() {
        return Err(CmmError::EmptyExecutable);
    }

    let relative = under_dir(Path::new(executable));
    if relative.as_os_str().is_empty() {
        return Err(CmmError::ExecutableNotFound(executable.to_string()));
    }

    for dir in env::split_paths(search_path) {
        let candidate = dir.join(&relative);
        trace!(candidate = %candidate.display(), "probing for executable");
        if fs.exists(&candidate) {
            debug!(executable, resolved = %candidate.display(), "executable found on search path");
            return Ok(candidate);
        }
    }

    Err(CmmError::ExecutableNotFound(executable.to_string()))
}

/// `name` with any root or drive prefix dropped, so that joining it onto a
/// search-path directory always nests it below that directory.
fn under_dir(name: &Path) -> PathBuf {
    name.components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}

/// [`locate_executable`] against the process's own `PATH`.
///
/// A missing `PATH` behaves like an empty one.
pub fn locate_on_env_path(fs: &dyn FileSystem, executable: &str) -> Result<PathBuf> {
    let search_path = env::var_os(SEARCH_PATH_VAR).unwrap_or_default();
    locate_executable(fs, &search_path, executable)
}
