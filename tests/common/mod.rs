use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Create a temporary directory for testing.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a command with the binary and current directory set.
pub fn create_command(temp_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("raescrypt"));
    cmd.current_dir(temp_dir);
    cmd
}

/// Create an `encrypt` command with `--password`.
#[allow(dead_code)] // used across multiple test files, each compiled separately
pub fn create_encrypt_command(temp_dir: &Path, password: &str) -> Command {
    let mut cmd = create_command(temp_dir);
    cmd.arg("encrypt").arg("--password").arg(password);
    cmd
}

/// Create a `decrypt` command with `--password`.
#[allow(dead_code)]
pub fn create_decrypt_command(temp_dir: &Path, password: &str) -> Command {
    let mut cmd = create_command(temp_dir);
    cmd.arg("decrypt").arg("--password").arg(password);
    cmd
}
