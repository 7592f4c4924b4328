// tests/construction.rs

use std::env;
use std::fs::File;

use cmm::ControlMyMonitor;
use cmm::errors::CmmError;
use cmm::fs::RealFileSystem;
use cmm::resolve::locate_executable;
use cmm_test_utils::init_tracing;
use tempfile::tempdir;

#[test]
fn empty_executable_name_is_rejected() {
    init_tracing();
    let err = ControlMyMonitor::new("").unwrap_err();
    assert!(matches!(err, CmmError::EmptyExecutable));
    assert!(err.is_configuration());
}

#[test]
fn unknown_executable_is_not_found() {
    init_tracing();
    let name = "cmm-definitely-not-installed-7f3a9c.exe";

    match ControlMyMonitor::new(name) {
        Err(CmmError::ExecutableNotFound(missing)) => assert_eq!(missing, name),
        other => panic!("expected ExecutableNotFound, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn executable_on_path_builds_a_facade() {
    init_tracing();
    let cmm = ControlMyMonitor::new("sh").unwrap();
    assert_eq!(cmm.executor().executable(), "sh");
}

#[test]
fn lookup_probes_real_directories_in_order() {
    init_tracing();
    let empty = tempdir().unwrap();
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    File::create(first.path().join("ControlMyMonitor.exe")).unwrap();
    File::create(second.path().join("ControlMyMonitor.exe")).unwrap();

    let search_path =
        env::join_paths([empty.path(), first.path(), second.path()]).unwrap();

    let found =
        locate_executable(&RealFileSystem, &search_path, "ControlMyMonitor.exe").unwrap();

    assert_eq!(found, first.path().join("ControlMyMonitor.exe"));
}

#[test]
fn lookup_does_not_require_the_file_to_be_executable() {
    init_tracing();
    let dir = tempdir().unwrap();
    // a plain empty file: existence is all that is checked
    File::create(dir.path().join("tool")).unwrap();

    let search_path = env::join_paths([dir.path()]).unwrap();

    assert!(locate_executable(&RealFileSystem, &search_path, "tool").is_ok());
    assert!(matches!(
        locate_executable(&RealFileSystem, &search_path, "other-tool"),
        Err(CmmError::ExecutableNotFound(_))
    ));
}
