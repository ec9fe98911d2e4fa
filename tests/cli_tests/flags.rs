use crate::common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn version_flag_reports_name_and_version() {
    let temp_dir = create_temp_dir();
    let mut cmd = create_command(temp_dir.path());
    cmd.arg("--version");
    cmd.assert().success().stdout(
        predicate::str::contains("raescrypt")
            .and(predicate::str::contains("("))
            .and(predicate::str::contains(")")),
    );
}

#[test]
fn quiet_flag_suppresses_info_but_not_errors() {
    let temp_dir = create_temp_dir();
    let input_path = temp_dir.path().join("secret.txt");
    fs::write(&input_path, "APP_KEY=test123").unwrap();

    let mut cmd = create_encrypt_command(temp_dir.path(), TEST_PASSWORD);
    cmd.arg("--input").arg("secret.txt").arg("--quiet");
    cmd.assert().success().stdout(predicate::str::is_empty());

    let mut cmd = create_encrypt_command(temp_dir.path(), TEST_PASSWORD);
    cmd.arg("--input")
        .arg("nonexistent.txt")
        .arg("--quiet");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("was not found"));
}

#[test]
fn force_flag_is_required_to_overwrite_existing_output() {
    let temp_dir = create_temp_dir();
    let input_path = temp_dir.path().join("secret.txt");
    fs::write(&input_path, "APP_KEY=test123").unwrap();

    let mut cmd = create_encrypt_command(temp_dir.path(), TEST_PASSWORD);
    cmd.arg("--input").arg("secret.txt");
    cmd.assert().success();

    let first_encrypted = fs::read(temp_dir.path().join("secret.txt.aes")).unwrap();

    // Second run without --force must refuse to clobber the existing output.
    let mut cmd = create_encrypt_command(temp_dir.path(), TEST_PASSWORD);
    cmd.arg("--input").arg("secret.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let mut cmd = create_encrypt_command(temp_dir.path(), TEST_PASSWORD);
    cmd.arg("--input").arg("secret.txt").arg("--force");
    cmd.assert().success();

    let second_encrypted = fs::read(temp_dir.path().join("secret.txt.aes")).unwrap();
    // A fresh random IV1/IK means the two containers differ even though the
    // plaintext and password are identical.
    assert_ne!(first_encrypted, second_encrypted);
}

#[test]
fn verbose_flag_is_accepted_at_every_level() {
    let temp_dir = create_temp_dir();
    let input_path = temp_dir.path().join("secret.txt");
    fs::write(&input_path, "APP_KEY=test123").unwrap();

    for flag in ["-v", "-vv", "-vvv"] {
        let mut cmd = create_encrypt_command(temp_dir.path(), TEST_PASSWORD);
        cmd.arg("--input").arg("secret.txt").arg("--force").arg(flag);
        cmd.assert().success();
    }
}

#[test]
fn invalid_buffer_size_is_rejected() {
    let temp_dir = create_temp_dir();
    let input_path = temp_dir.path().join("secret.txt");
    fs::write(&input_path, "APP_KEY=test123").unwrap();

    let mut cmd = create_encrypt_command(temp_dir.path(), TEST_PASSWORD);
    cmd.arg("--input")
        .arg("secret.txt")
        .arg("--buffer-size")
        .arg("17");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("multiple of 16"));
}
