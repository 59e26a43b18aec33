//! Test harness for dirsize integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use dirsize::test_utils::TestDir;

pub fn run_dirsize(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_dirsize");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run dirsize");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run against `dir` as `--root`, with colors off.
pub fn scan(dir: &TestDir, extra: &[&str]) -> (String, String, i32) {
    let root = dir.path().to_string_lossy().to_string();
    let mut args = vec!["--root", root.as_str(), "--color", "never"];
    args.extend_from_slice(extra);
    run_dirsize(dir.path(), &args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let path = dir.add_file("nested/file.bin", 7);
        assert_eq!(std::fs::metadata(path).unwrap().len(), 7);
    }
}
