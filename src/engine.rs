//! Orchestration: parameter validation, resource lifecycle, and the
//! programmatic `encrypt_file`/`decrypt_file` surface.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use rand::RngCore;
use zeroize::Zeroize;

use crate::error::{AesCryptError, Result};
use crate::header;
use crate::keys;
use crate::stream;
use crate::stretch::{self, MAX_PASSPHRASE_LEN};

fn validate_buffer_size(buffer_size: usize) -> Result<()> {
    if buffer_size == 0 || buffer_size % 16 != 0 {
        return Err(AesCryptError::InvalidBufferSize);
    }
    Ok(())
}

fn validate_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.encode_utf16().count() > MAX_PASSPHRASE_LEN {
        return Err(AesCryptError::PasswordTooLong);
    }
    Ok(())
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|_| AesCryptError::InputNotFound(path.to_path_buf()))
}

fn create_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| AesCryptError::OutputUnwritable(format!("{}: {e}", path.display())))
}

/// Encrypts `input` into `output` under `passphrase`, reading/writing in
/// `buffer_size`-byte chunks. On any failure after `output` was created, the
/// partially-written file is removed before the error is returned.
pub fn encrypt_file(input: &Path, output: &Path, passphrase: &str, buffer_size: usize) -> Result<()> {
    validate_buffer_size(buffer_size)?;
    validate_passphrase(passphrase)?;

    let input_file = open_input(input)?;
    let mut reader = BufReader::new(input_file);
    let output_file = create_output(output)?;
    let mut writer = BufWriter::new(output_file);

    let result = (|| -> Result<()> {
        let mut rng = rand::thread_rng();
        let mut iv1 = [0u8; 16];
        let mut iv0 = [0u8; 16];
        let mut ik = [0u8; 32];
        rng.fill_bytes(&mut iv1);
        rng.fill_bytes(&mut iv0);
        rng.fill_bytes(&mut ik);

        let mut outer_key = stretch::stretch(passphrase, &iv1);
        let wrapped = keys::wrap_inner_key(&outer_key, &iv1, &iv0, &ik);
        let key_mac = keys::compute_key_mac(&outer_key, &wrapped)?;

        header::write_header(&mut writer, &iv1, &wrapped, &key_mac)?;
        let body_result = stream::encrypt_body(&mut reader, &mut writer, &ik, &iv0, buffer_size);

        outer_key.zeroize();
        ik.zeroize();
        body_result?;

        writer.flush()?;
        Ok(())
    })();

    if result.is_err() {
        drop(writer);
        let _ = fs::remove_file(output);
    }
    result
}

/// Decrypts `input` into `output` under `passphrase`, reading/writing in
/// `buffer_size`-byte chunks. On any failure after `output` was created, the
/// partially-written file is removed before the error is returned, mirroring
/// the reference implementation's cleanup-on-corruption behavior.
pub fn decrypt_file(input: &Path, output: &Path, passphrase: &str, buffer_size: usize) -> Result<()> {
    validate_buffer_size(buffer_size)?;
    validate_passphrase(passphrase)?;

    let input_file = open_input(input)?;
    let file_size = input_file
        .metadata()
        .map_err(|_| AesCryptError::InputNotFound(input.to_path_buf()))?
        .len();
    let mut reader = BufReader::new(input_file);

    let parsed = header::read_header(&mut reader, file_size)?;

    let mut outer_key = stretch::stretch(passphrase, &parsed.iv1);
    let key_mac_ok = keys::verify_key_mac(&outer_key, &parsed.wrapped, &parsed.key_mac)?;
    if !key_mac_ok {
        outer_key.zeroize();
        return Err(AesCryptError::WrongPasswordOrTampered);
    }
    let (iv0, mut ik) = keys::unwrap_inner_key(&outer_key, &parsed.iv1, &parsed.wrapped);
    outer_key.zeroize();

    let body_len = file_size
        .checked_sub(parsed.header_len + 33)
        .ok_or(AesCryptError::CorruptFile)?;
    if body_len % 16 != 0 {
        ik.zeroize();
        return Err(AesCryptError::CorruptFile);
    }

    let output_file = create_output(output)?;
    let mut writer = BufWriter::new(output_file);

    let body_result = stream::decrypt_body(&mut reader, &mut writer, &ik, &iv0, body_len, buffer_size);
    ik.zeroize();

    let result = body_result.and_then(|()| writer.flush().map_err(Into::into));

    if result.is_err() {
        drop(writer);
        let _ = fs::remove_file(output);
    }
    result
}
