//! Output path derivation, following the real `aescrypt` CLI's own
//! convention: encrypting appends `.aes`, decrypting strips it.

use std::path::{Path, PathBuf};

/// Derives the default output path for `input` given the direction of the
/// operation, or `None` when there's no sensible default (decrypting a
/// file that doesn't end in `.aes`).
pub fn derive_output_path(input: &Path, is_encrypt: bool) -> Option<PathBuf> {
    if is_encrypt {
        let mut name = input.as_os_str().to_os_string();
        name.push(".aes");
        Some(PathBuf::from(name))
    } else {
        let name = input.to_str()?;
        name.strip_suffix(".aes").map(PathBuf::from)
    }
}
