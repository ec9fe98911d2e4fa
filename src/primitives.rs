//! Raw block-cipher and MAC building blocks shared by the key hierarchy
//! (`keys.rs`) and the body stream processor (`stream.rs`).
//!
//! Deliberately does not use `cipher::block_padding` at all: this format's
//! tail convention is not PKCS#7 (see `stream.rs`), and the 48-byte wrapped
//! key blob is already exactly block-aligned, so nothing here ever needs a
//! padding scheme. Blocks are processed one at a time via
//! `BlockEncryptMut`/`BlockDecryptMut`, which keeps the CBC chaining state in
//! the encryptor/decryptor across calls — exactly what streaming needs.

use aes::Aes256;
use cbc::{Decryptor, Encryptor};
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use generic_array::GenericArray;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::{AesCryptError, Result};

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// A CBC encryptor that processes one 16-byte block at a time, retaining
/// chaining state across calls.
pub struct CbcEnc(Aes256CbcEnc);

impl CbcEnc {
    pub fn new(key: &[u8; 32], iv: &[u8; 16]) -> Self {
        Self(Aes256CbcEnc::new(key.into(), iv.into()))
    }

    /// Encrypts `buf` in place. `buf.len()` must be a multiple of 16.
    pub fn encrypt_blocks(&mut self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len() % 16, 0);
        for chunk in buf.chunks_exact_mut(16) {
            let block = GenericArray::from_mut_slice(chunk);
            self.0.encrypt_block_mut(block);
        }
    }
}

/// A CBC decryptor, mirroring [`CbcEnc`].
pub struct CbcDec(Aes256CbcDec);

impl CbcDec {
    pub fn new(key: &[u8; 32], iv: &[u8; 16]) -> Self {
        Self(Aes256CbcDec::new(key.into(), iv.into()))
    }

    /// Decrypts `buf` in place. `buf.len()` must be a multiple of 16.
    pub fn decrypt_blocks(&mut self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len() % 16, 0);
        for chunk in buf.chunks_exact_mut(16) {
            let block = GenericArray::from_mut_slice(chunk);
            self.0.decrypt_block_mut(block);
        }
    }
}

/// Builds an HMAC-SHA256 instance, surfacing key-construction failure as
/// `AesCryptError` instead of panicking. In practice HMAC accepts a key of
/// any length, so this never actually fails for the fixed-size keys used
/// throughout this crate; the `Result` just avoids narrating that via
/// `.expect()`.
fn new_hmac_sha256(key: &[u8]) -> Result<HmacSha256> {
    HmacSha256::new_from_slice(key).map_err(|_| AesCryptError::CorruptFile)
}

/// One-shot HMAC-SHA256 over a single buffer.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<[u8; 32]> {
    let mut mac = new_hmac_sha256(key)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().into())
}

/// An HMAC-SHA256 accumulator fed incrementally as chunks are produced.
pub struct StreamingHmac(HmacSha256);

impl StreamingHmac {
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self(new_hmac_sha256(key)?))
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    pub fn finalize(self) -> [u8; 32] {
        self.0.finalize().into_bytes().into()
    }
}

/// Constant-time comparison, used for both the key-MAC and body-MAC checks.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).unwrap_u8() == 1
}
