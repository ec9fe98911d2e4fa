//! Error taxonomy for the container codec.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong encrypting or decrypting a container.
#[derive(Debug)]
pub enum AesCryptError {
    /// `buffer_size` was zero or not a multiple of the AES block size (16).
    InvalidBufferSize,
    /// The passphrase exceeded 1024 UTF-16 code units.
    PasswordTooLong,
    /// The input path could not be opened for reading.
    InputNotFound(PathBuf),
    /// The output path could not be opened (or created) for writing.
    OutputUnwritable(String),
    /// The file is too short or doesn't start with the `AES` magic.
    NotAesCryptFile,
    /// The version byte isn't `0x02`.
    UnsupportedVersion(u8),
    /// The header or body framing is malformed (short reads, bad tail byte,
    /// a body length that isn't a multiple of the AES block size).
    CorruptFile,
    /// The key-MAC didn't verify. This means either the passphrase is wrong
    /// or the header/wrapped key was tampered with; the two are
    /// indistinguishable by design.
    WrongPasswordOrTampered,
    /// The key-MAC verified but the body-MAC didn't: the body was tampered
    /// with after encryption.
    BodyMacMismatch,
    /// An I/O failure not covered by the above (disk full, permission
    /// denied mid-write, etc).
    Io(io::Error),
}

impl fmt::Display for AesCryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AesCryptError::InvalidBufferSize => {
                write!(f, "buffer size must be a positive multiple of 16")
            }
            AesCryptError::PasswordTooLong => {
                write!(f, "password is too long (max 1024 UTF-16 code units)")
            }
            AesCryptError::InputNotFound(path) => {
                write!(f, "file \"{}\" was not found", path.display())
            }
            AesCryptError::OutputUnwritable(detail) => {
                write!(f, "unable to write output file: {detail}")
            }
            AesCryptError::NotAesCryptFile => {
                write!(f, "file is corrupted or not an AES Crypt file")
            }
            AesCryptError::UnsupportedVersion(v) => {
                write!(f, "unsupported AES Crypt file format version: {v}")
            }
            AesCryptError::CorruptFile => write!(f, "file is corrupted"),
            AesCryptError::WrongPasswordOrTampered => {
                write!(f, "wrong password (or file is corrupted)")
            }
            AesCryptError::BodyMacMismatch => write!(f, "bad HMAC (file is corrupted)"),
            AesCryptError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for AesCryptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AesCryptError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AesCryptError {
    fn from(e: io::Error) -> Self {
        AesCryptError::Io(e)
    }
}

impl AesCryptError {
    /// Distinct process exit code per error kind, for CLI use.
    pub fn exit_code(&self) -> i32 {
        match self {
            AesCryptError::InvalidBufferSize => 2,
            AesCryptError::PasswordTooLong => 3,
            AesCryptError::InputNotFound(_) => 4,
            AesCryptError::OutputUnwritable(_) => 5,
            AesCryptError::NotAesCryptFile => 6,
            AesCryptError::UnsupportedVersion(_) => 7,
            AesCryptError::CorruptFile => 8,
            AesCryptError::WrongPasswordOrTampered => 9,
            AesCryptError::BodyMacMismatch => 10,
            AesCryptError::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AesCryptError>;
