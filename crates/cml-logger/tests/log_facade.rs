//! `log` macros write through the installed global logger

use std::fs;

use cml_logger::{install, LogError, LogOptions};
use tempfile::tempdir;

#[test]
fn test_log_macros_use_installed_logger() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("facade.log");

    install(Some(LogOptions::file_at(&path))).unwrap();

    log::warn!("low memory");
    log::trace!("tick {}", 1);
    log::error!("disk full");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("] [WARNING] low memory"));
    assert!(lines[1].ends_with("] [VERBOSE] tick 1"));
    assert!(lines[2].ends_with("] [ERROR] disk full"));

    let err = install(None).unwrap_err();
    assert!(matches!(err, LogError::Facade(_)));
}
