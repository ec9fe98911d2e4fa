//! A streaming implementation of the AES Crypt version 2 container format:
//! password stretching, a two-level authenticated key hierarchy, and
//! chunked AES-256-CBC body encryption with an HMAC-SHA256 chain.
//!
//! The core (this crate root and its non-`cli` modules) only ever sees
//! `Read`/`Write` streams and explicit byte buffers — no interactive
//! prompting, no path conventions, no progress reporting. Those live in
//! [`cli`], an external collaborator built on top of [`encrypt_file`]/
//! [`decrypt_file`].

pub mod error;
pub mod header;
pub mod keys;
pub mod primitives;
pub mod stream;
pub mod stretch;

mod engine;

#[cfg(any(feature = "encrypt", feature = "decrypt"))]
pub mod cli;

pub use engine::{decrypt_file, encrypt_file};
pub use error::{AesCryptError, Result};
