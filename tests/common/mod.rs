//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Helper to get the compiled demo binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push("fncli");

    // If the binary doesn't exist yet, build it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "fncli"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build fncli binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Package version for testing the --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
