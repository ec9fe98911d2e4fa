//! `decrypt` subcommand implementation.

use std::path::Path;

use anyhow::{bail, Context};

use crate::cli::key_handling::get_passphrase;
use crate::cli::output::{info, OutputConfig};
use crate::engine;

/// Runs the `decrypt` subcommand end to end, mirroring [`super::encrypt::run_encrypt`].
pub fn run_decrypt(
    input: &Path,
    output: &Path,
    password_arg: Option<&str>,
    buffer_size: usize,
    force: bool,
    no_interaction: bool,
    output_config: &OutputConfig,
) -> anyhow::Result<()> {
    if output.exists() && !force {
        bail!("{} already exists; pass --force to overwrite", output.display());
    }

    let password = get_passphrase(password_arg, false, no_interaction).map_err(|e| anyhow::anyhow!(e))?;

    engine::decrypt_file(input, output, &password, buffer_size).context("decryption failed")?;

    info(
        output_config,
        &format!("Decrypted {} to {}", input.display(), output.display()),
    );
    Ok(())
}
