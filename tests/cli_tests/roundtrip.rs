use crate::common::*;
use std::fs;

#[test]
fn encrypt_then_decrypt_recovers_original_content() {
    let temp_dir = create_temp_dir();
    let input_path = temp_dir.path().join("secret.txt");
    let encrypted_path = temp_dir.path().join("secret.txt.aes");

    let original_content = "APP_KEY=test123\nDB_PASSWORD=secret456\nANOTHER_VAR=value";
    fs::write(&input_path, original_content).unwrap();

    let mut cmd = create_encrypt_command(temp_dir.path(), TEST_PASSWORD);
    cmd.arg("--input").arg("secret.txt");
    cmd.assert().success();

    assert!(encrypted_path.exists());
    let encrypted_bytes = fs::read(&encrypted_path).unwrap();
    assert_ne!(encrypted_bytes, original_content.as_bytes());
    assert_eq!(&encrypted_bytes[0..3], b"AES");

    fs::remove_file(&input_path).unwrap();

    let mut cmd = create_decrypt_command(temp_dir.path(), TEST_PASSWORD);
    cmd.arg("--input").arg("secret.txt.aes");
    cmd.assert().success();

    assert!(input_path.exists());
    let decrypted_content = fs::read_to_string(&input_path).unwrap();
    assert_eq!(decrypted_content, original_content);
}

#[test]
fn roundtrip_survives_explicit_output_paths() {
    let temp_dir = create_temp_dir();
    let input_path = temp_dir.path().join("plain.bin");
    let cipher_path = temp_dir.path().join("cipher.out");
    let restored_path = temp_dir.path().join("restored.bin");

    let original_content: Vec<u8> = (0u8..=255).cycle().take(5000).collect();
    fs::write(&input_path, &original_content).unwrap();

    let mut cmd = create_encrypt_command(temp_dir.path(), TEST_PASSWORD);
    cmd.arg("--input")
        .arg("plain.bin")
        .arg("--output")
        .arg("cipher.out");
    cmd.assert().success();
    assert!(cipher_path.exists());

    let mut cmd = create_decrypt_command(temp_dir.path(), TEST_PASSWORD);
    cmd.arg("--input")
        .arg("cipher.out")
        .arg("--output")
        .arg("restored.bin");
    cmd.assert().success();

    let restored = fs::read(&restored_path).unwrap();
    assert_eq!(restored, original_content);
}

#[test]
fn roundtrip_is_stable_across_buffer_sizes() {
    let temp_dir = create_temp_dir();
    let input_path = temp_dir.path().join("data.bin");
    let original_content: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
    fs::write(&input_path, &original_content).unwrap();

    for buffer_size in ["16", "32", "1024", "65536"] {
        let cipher_path = temp_dir.path().join(format!("data.{buffer_size}.aes"));
        let restored_path = temp_dir.path().join(format!("data.{buffer_size}.restored"));

        let mut cmd = create_encrypt_command(temp_dir.path(), TEST_PASSWORD);
        cmd.arg("--input")
            .arg("data.bin")
            .arg("--output")
            .arg(cipher_path.file_name().unwrap())
            .arg("--buffer-size")
            .arg(buffer_size);
        cmd.assert().success();

        let mut cmd = create_decrypt_command(temp_dir.path(), TEST_PASSWORD);
        cmd.arg("--input")
            .arg(cipher_path.file_name().unwrap())
            .arg("--output")
            .arg(restored_path.file_name().unwrap())
            .arg("--buffer-size")
            .arg(buffer_size);
        cmd.assert().success();

        let restored = fs::read(&restored_path).unwrap();
        assert_eq!(restored, original_content, "buffer size {buffer_size} failed to round-trip");
    }
}

#[test]
fn encrypting_empty_file_roundtrips_to_empty_file() {
    let temp_dir = create_temp_dir();
    let input_path = temp_dir.path().join("empty.txt");
    fs::write(&input_path, b"").unwrap();

    let mut cmd = create_encrypt_command(temp_dir.path(), "foo");
    cmd.arg("--input").arg("empty.txt");
    cmd.assert().success();

    let encrypted = fs::read(temp_dir.path().join("empty.txt.aes")).unwrap();
    // magic(3) + version(1) + reserved(1) + CREATED_BY ext + container ext +
    // terminator(2) + iv1(16) + wrapped(48) + key_mac(32) + tail_len(1) + body_mac(32),
    // with zero body blocks.
    assert!(encrypted.len() >= 136);

    fs::remove_file(&input_path).unwrap();
    let mut cmd = create_decrypt_command(temp_dir.path(), "foo");
    cmd.arg("--input").arg("empty.txt.aes");
    cmd.assert().success();

    let restored = fs::read(&input_path).unwrap();
    assert!(restored.is_empty());
}
