// Unit tests for logger module
// Global logger state is process-wide, so only file handling and
// repeat calls are exercised here

use crate::error::CatalogAppError;
use crate::logger::{initialize, open_log_file};

use std::path::PathBuf;

/// **VALUE**: Verifies that calling initialize() repeatedly never fails.
///
/// **WHY THIS MATTERS**: The setup hook and tests can both reach initialization. A second
/// call that errors would abort startup.
///
/// **BUG THIS CATCHES**: Would catch removal of the Once/AtomicBool guards, which makes
/// fern fail when a global logger is installed twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A writable temporary directory
    let temp_dir = tempfile::tempdir().unwrap();

    // WHEN: Calling initialize twice
    let first = initialize(temp_dir.path());
    let second = initialize(temp_dir.path());

    // THEN: The second call is a no-op
    assert!(second.is_ok(), "Second initialization should be idempotent");

    // AND: The first either installed the logger or reported why not
    if let Err(e) = first {
        assert!(matches!(e, CatalogAppError::Catalog { .. }));
    }
}

#[test]
fn given_writable_dir_when_opening_log_file_then_creates_catalog_log() {
    // GIVEN: An empty directory
    let temp_dir = tempfile::tempdir().unwrap();

    // WHEN: Opening the log file
    let result = open_log_file(temp_dir.path());

    // THEN: catalog.log exists
    assert!(result.is_ok());
    assert!(temp_dir.path().join("catalog.log").exists());
}

/// **VALUE**: Verifies that an unusable log directory is reported, not panicked on.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` being unwrapped, which would crash
/// startup on permission or filesystem problems.
#[test]
fn given_invalid_log_dir_when_opening_log_file_then_returns_catalog_error() {
    // GIVEN: A path below a non-directory
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Opening the log file
    let result = open_log_file(&invalid_dir);

    // THEN: A Catalog error naming the file
    match result {
        Err(CatalogAppError::Catalog { message, .. }) => {
            assert!(message.contains("catalog.log"), "got: {message}");
        }
        other => panic!("expected Catalog error, got {other:?}"),
    }
}
