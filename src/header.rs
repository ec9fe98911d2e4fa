//! AES Crypt v2 header framing: magic, version, extensions, outer IV,
//! wrapped key blob, key-MAC.

use std::io::{Read, Write};

use crate::error::{AesCryptError, Result};

const MAGIC: [u8; 3] = *b"AES";
const VERSION: u8 = 0x02;

/// Smallest possible valid container: 3 (magic) + 1 (version) + 1 (reserved)
/// + 2 (CREATED_BY ext header) + len("CREATED_BY") + 1 + len(cby) + 2 (container
/// ext header) + 128 + 2 (terminator) + 16 (iv1) + 48 (wrapped) + 32 (key-mac)
/// + 1 (tail-length) + 32 (body-mac). The Python reference (and this crate)
/// treats 136 as the floor regardless of the CREATED_BY content length.
pub const MIN_FILE_SIZE: u64 = 136;

fn created_by_extension() -> Vec<u8> {
    let cby = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));
    let mut content = Vec::with_capacity("CREATED_BY".len() + 1 + cby.len());
    content.extend_from_slice(b"CREATED_BY");
    content.push(0);
    content.extend_from_slice(cby.as_bytes());
    content
}

fn write_extension<W: Write>(writer: &mut W, content: &[u8]) -> std::io::Result<()> {
    let len = u16::try_from(content.len()).map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "extension content exceeds u16 length")
    })?;
    writer.write_all(&len.to_be_bytes())?;
    writer.write_all(content)
}

/// Writes the full header: magic, version, reserved byte, the two
/// extensions, the terminator, IV1, the wrapped key blob, and the key-MAC.
pub fn write_header<W: Write>(
    writer: &mut W,
    iv1: &[u8; 16],
    wrapped: &[u8; 48],
    key_mac: &[u8; 32],
) -> std::io::Result<()> {
    writer.write_all(&MAGIC)?;
    writer.write_all(&[VERSION])?;
    writer.write_all(&[0u8])?; // reserved

    write_extension(writer, &created_by_extension())?;
    write_extension(writer, &[0u8; 128])?;
    writer.write_all(&[0u8, 0u8])?; // terminator

    writer.write_all(iv1)?;
    writer.write_all(wrapped)?;
    writer.write_all(key_mac)?;
    Ok(())
}

/// Fields recovered from a container's header.
pub struct ParsedHeader {
    pub iv1: [u8; 16],
    pub wrapped: [u8; 48],
    pub key_mac: [u8; 32],
    /// Total bytes consumed from the start of the file through the key-MAC,
    /// i.e. where the body begins.
    pub header_len: u64,
}

/// Parses a header from `reader`. `file_size` is the total size of the
/// container, used only for the minimum-size check.
pub fn read_header<R: Read>(reader: &mut R, file_size: u64) -> Result<ParsedHeader> {
    if file_size < MIN_FILE_SIZE {
        return Err(AesCryptError::NotAesCryptFile);
    }

    let mut magic = [0u8; 3];
    reader
        .read_exact(&mut magic)
        .map_err(|_| AesCryptError::NotAesCryptFile)?;
    if magic != MAGIC {
        return Err(AesCryptError::NotAesCryptFile);
    }

    let mut version = [0u8; 1];
    reader
        .read_exact(&mut version)
        .map_err(|_| AesCryptError::CorruptFile)?;
    if version[0] != VERSION {
        return Err(AesCryptError::UnsupportedVersion(version[0]));
    }

    let mut reserved = [0u8; 1];
    reader
        .read_exact(&mut reserved)
        .map_err(|_| AesCryptError::CorruptFile)?;

    let mut consumed: u64 = 3 + 1 + 1;
    loop {
        let mut len_buf = [0u8; 2];
        reader
            .read_exact(&mut len_buf)
            .map_err(|_| AesCryptError::CorruptFile)?;
        consumed += 2;
        let len = u16::from_be_bytes(len_buf) as usize;
        if len == 0 {
            break;
        }
        let mut discard = vec![0u8; len];
        reader
            .read_exact(&mut discard)
            .map_err(|_| AesCryptError::CorruptFile)?;
        consumed += len as u64;
    }

    let mut iv1 = [0u8; 16];
    reader
        .read_exact(&mut iv1)
        .map_err(|_| AesCryptError::CorruptFile)?;
    consumed += 16;

    let mut wrapped = [0u8; 48];
    reader
        .read_exact(&mut wrapped)
        .map_err(|_| AesCryptError::CorruptFile)?;
    consumed += 48;

    let mut key_mac = [0u8; 32];
    reader
        .read_exact(&mut key_mac)
        .map_err(|_| AesCryptError::CorruptFile)?;
    consumed += 32;

    Ok(ParsedHeader {
        iv1,
        wrapped,
        key_mac,
        header_len: consumed,
    })
}
