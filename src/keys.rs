//! The two-level key hierarchy: the outer key (K) only ever wraps
//! `IV0 ‖ IK`; the body cipher and body MAC use IK exclusively. K must never
//! touch file contents directly.

use zeroize::Zeroize;

use crate::error::Result;
use crate::primitives::{self, CbcDec, CbcEnc};

/// Encrypts `iv0 ‖ ik` (48 bytes, already block-aligned) under `(outer_key,
/// iv1)`.
pub fn wrap_inner_key(outer_key: &[u8; 32], iv1: &[u8; 16], iv0: &[u8; 16], ik: &[u8; 32]) -> [u8; 48] {
    let mut buf = [0u8; 48];
    buf[..16].copy_from_slice(iv0);
    buf[16..].copy_from_slice(ik);
    CbcEnc::new(outer_key, iv1).encrypt_blocks(&mut buf);
    buf
}

/// Decrypts a wrapped key blob back into `(iv0, ik)`. Infallible: raw
/// AES-256-CBC over an already block-aligned buffer cannot fail on its own —
/// authenticity is established separately via [`verify_key_mac`].
pub fn unwrap_inner_key(outer_key: &[u8; 32], iv1: &[u8; 16], wrapped: &[u8; 48]) -> ([u8; 16], [u8; 32]) {
    let mut buf = *wrapped;
    CbcDec::new(outer_key, iv1).decrypt_blocks(&mut buf);

    let mut iv0 = [0u8; 16];
    let mut ik = [0u8; 32];
    iv0.copy_from_slice(&buf[..16]);
    ik.copy_from_slice(&buf[16..]);
    buf.zeroize();
    (iv0, ik)
}

/// HMAC-SHA256 of the wrapped blob, keyed by the outer key.
pub fn compute_key_mac(outer_key: &[u8; 32], wrapped: &[u8; 48]) -> Result<[u8; 32]> {
    primitives::hmac_sha256(outer_key, wrapped)
}

/// Constant-time verification of a stored key-MAC against a freshly
/// computed one.
pub fn verify_key_mac(outer_key: &[u8; 32], wrapped: &[u8; 48], stored_mac: &[u8; 32]) -> Result<bool> {
    let actual = compute_key_mac(outer_key, wrapped)?;
    Ok(primitives::constant_time_eq(&actual, stored_mac))
}
