//! Passphrase resolution: a `--password` flag, falling back to an
//! interactive, confirmed `rpassword` prompt unless `--no-interaction` is
//! set.

use std::io::{self, Write};

/// Resolves the passphrase to use for an operation.
///
/// - If `password_arg` is `Some`, it's used as-is.
/// - Otherwise, if `no_interaction` is set, this is an error (there's no
///   source left to get a passphrase from).
/// - Otherwise, prompts interactively; for encryption, asks for
///   confirmation and errors if the two entries don't match.
pub fn get_passphrase(
    password_arg: Option<&str>,
    is_encrypt: bool,
    no_interaction: bool,
) -> Result<String, String> {
    if let Some(password) = password_arg {
        return Ok(password.to_string());
    }

    if no_interaction {
        return Err(
            "a password is required when using --no-interaction; please provide --password".to_string(),
        );
    }

    let prompt = if is_encrypt {
        "Enter encryption password: "
    } else {
        "Enter decryption password: "
    };
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| format!("failed to flush stdout: {e}"))?;
    let password = rpassword::read_password().map_err(|e| format!("failed to read password: {e}"))?;

    if is_encrypt {
        print!("Confirm encryption password: ");
        io::stdout()
            .flush()
            .map_err(|e| format!("failed to flush stdout: {e}"))?;
        let confirmation =
            rpassword::read_password().map_err(|e| format!("failed to read password: {e}"))?;
        if password != confirmation {
            return Err("passwords do not match".to_string());
        }
    }

    Ok(password)
}
