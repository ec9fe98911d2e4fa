//! Password stretching: `digest = SHA256(digest ‖ utf16le(passphrase))`,
//! 8192 rounds, starting from `iv1 ‖ 16 zero bytes`.
//!
//! This is *not* PBKDF2 — it's the bespoke construction the AES Crypt v2
//! wire format defines, so the round count and zero suffix are fixed by the
//! format rather than configurable.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

const STRETCH_ROUNDS: usize = 8192;

/// Maximum passphrase length, in UTF-16 code units.
pub const MAX_PASSPHRASE_LEN: usize = 1024;

/// Derives the 32-byte outer key from a passphrase and the outer IV.
pub fn stretch(passphrase: &str, iv1: &[u8; 16]) -> [u8; 32] {
    let mut utf16le: Vec<u8> = Vec::with_capacity(passphrase.len() * 2);
    for unit in passphrase.encode_utf16() {
        utf16le.extend_from_slice(&unit.to_le_bytes());
    }

    let mut digest = [0u8; 32];
    digest[..16].copy_from_slice(iv1);

    for _ in 0..STRETCH_ROUNDS {
        let mut hasher = Sha256::new();
        hasher.update(digest);
        hasher.update(&utf16le);
        digest = hasher.finalize().into();
    }

    utf16le.zeroize();
    digest
}
