//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a YAML document into a fresh temporary directory
///
/// Returns the TempDir (keep it alive) and the path to the document.
#[allow(dead_code)]
pub fn write_document(contents: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, contents).expect("Failed to write config document");
    (dir, path)
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Sample documents for the reference `ServiceConfig` schema
#[allow(dead_code)]
pub mod documents {
    /// Every constraint satisfied
    pub const VALID: &str = r"
name: billing
hosts:
  - 10.0.0.1
  - 10.0.0.2
timeout_secs: 30
description: Billing API
admin_email: ops@example.com
labels:
  team: payments
";

    /// `name` is the empty string
    pub const BLANK_NAME: &str = r"
name: ''
hosts: [10.0.0.1]
timeout_secs: 30
admin_email: ops@example.com
";

    /// `hosts` is an empty list
    pub const EMPTY_HOSTS: &str = r"
name: billing
hosts: []
timeout_secs: 30
admin_email: ops@example.com
";

    /// `name` key is missing
    pub const MISSING_NAME: &str = r"
hosts: [10.0.0.1]
timeout_secs: 30
admin_email: ops@example.com
";

    /// `hosts` key is missing
    pub const MISSING_HOSTS: &str = r"
name: billing
timeout_secs: 30
admin_email: ops@example.com
";

    /// `timeout_secs` is missing
    pub const MISSING_TIMEOUT: &str = r"
name: billing
hosts: [10.0.0.1]
admin_email: ops@example.com
";
}
