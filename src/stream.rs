//! The body stream processor: AES-256-CBC under `(IK, IV0)` plus an
//! HMAC-SHA256 over all body ciphertext, keyed by IK.
//!
//! The tail convention here is deliberately **not** PKCS#7: the pad *value*
//! matches PKCS#7 (`padLen` copies of the byte `padLen`), but no extra block
//! is appended when the final read already lands on a block boundary — the
//! one-byte tail-length field disambiguates instead. See `SPEC_FULL.md` §4.4
//! for why the scenario table's "extra dummy block" reading doesn't hold.

use std::io::{Read, Write};

use crate::error::{AesCryptError, Result};
use crate::primitives::{CbcDec, CbcEnc, StreamingHmac};

/// Reads until `buf` is full or the underlying reader hits EOF, looping past
/// short reads that aren't EOF (as `Read::read` is allowed to return fewer
/// bytes than requested without that meaning "no more data").
fn read_fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match reader.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

/// Encrypts the body of a container: reads plaintext from `reader` in
/// `buffer_size`-byte chunks, writes ciphertext to `writer`, then writes the
/// one-byte tail-length and the 32-byte body-MAC.
pub fn encrypt_body<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    ik: &[u8; 32],
    iv0: &[u8; 16],
    buffer_size: usize,
) -> Result<()> {
    if buffer_size == 0 || buffer_size % 16 != 0 {
        return Err(AesCryptError::InvalidBufferSize);
    }

    let mut enc = CbcEnc::new(ik, iv0);
    let mut hmac = StreamingHmac::new(ik)?;

    let tail_len: u8;
    loop {
        let mut chunk = vec![0u8; buffer_size];
        let n = read_fill(reader, &mut chunk)?;

        if n == buffer_size {
            enc.encrypt_blocks(&mut chunk);
            hmac.update(&chunk);
            writer.write_all(&chunk)?;
        } else {
            let r = (n % 16) as u8;
            let pad_len = if r == 0 { 0u8 } else { 16 - r };
            chunk.truncate(n);
            chunk.extend(std::iter::repeat(pad_len).take(pad_len as usize));

            if !chunk.is_empty() {
                enc.encrypt_blocks(&mut chunk);
                hmac.update(&chunk);
                writer.write_all(&chunk)?;
            }
            tail_len = r;
            break;
        }
    }

    writer.write_all(&[tail_len])?;
    writer.write_all(&hmac.finalize())?;
    Ok(())
}

/// Decrypts the body of a container. `body_len` is the number of ciphertext
/// bytes between the header and the trailing tail-length byte + body-MAC
/// (i.e. `file_size - header_len - 33`); the caller has already validated it
/// is a multiple of 16.
pub fn decrypt_body<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    ik: &[u8; 32],
    iv0: &[u8; 16],
    body_len: u64,
    buffer_size: usize,
) -> Result<()> {
    if buffer_size == 0 || buffer_size % 16 != 0 {
        return Err(AesCryptError::InvalidBufferSize);
    }

    let mut dec = CbcDec::new(ik, iv0);
    let mut hmac = StreamingHmac::new(ik)?;

    let mut remaining = body_len;
    let bs = buffer_size as u64;

    while remaining > bs {
        let mut chunk = vec![0u8; buffer_size];
        reader
            .read_exact(&mut chunk)
            .map_err(|_| AesCryptError::CorruptFile)?;
        hmac.update(&chunk);
        dec.decrypt_blocks(&mut chunk);
        writer.write_all(&chunk)?;
        remaining -= bs;
    }

    while remaining > 16 {
        let mut chunk = [0u8; 16];
        reader
            .read_exact(&mut chunk)
            .map_err(|_| AesCryptError::CorruptFile)?;
        hmac.update(&chunk);
        dec.decrypt_blocks(&mut chunk);
        writer.write_all(&chunk)?;
        remaining -= 16;
    }

    let mut last_block = if remaining == 16 {
        let mut b = [0u8; 16];
        reader
            .read_exact(&mut b)
            .map_err(|_| AesCryptError::CorruptFile)?;
        b.to_vec()
    } else if remaining == 0 {
        Vec::new()
    } else {
        return Err(AesCryptError::CorruptFile);
    };
    hmac.update(&last_block);

    let mut tail_buf = [0u8; 1];
    reader
        .read_exact(&mut tail_buf)
        .map_err(|_| AesCryptError::CorruptFile)?;
    let tail_len = tail_buf[0];
    if tail_len >= 16 {
        return Err(AesCryptError::CorruptFile);
    }

    dec.decrypt_blocks(&mut last_block);
    let trim = ((16 - tail_len as usize) % 16).min(last_block.len());
    let keep = last_block.len() - trim;
    writer.write_all(&last_block[..keep])?;

    let mut mac_tag = [0u8; 32];
    reader
        .read_exact(&mut mac_tag)
        .map_err(|_| AesCryptError::CorruptFile)?;
    let computed = hmac.finalize();
    if !crate::primitives::constant_time_eq(&computed, &mac_tag) {
        return Err(AesCryptError::BodyMacMismatch);
    }

    Ok(())
}
