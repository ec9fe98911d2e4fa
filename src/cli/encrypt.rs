//! `encrypt` subcommand implementation.

use std::path::Path;

use anyhow::{bail, Context};

use crate::cli::key_handling::get_passphrase;
use crate::cli::output::{info, OutputConfig};
use crate::engine;

/// Runs the `encrypt` subcommand end to end: resolves the passphrase,
/// refuses to clobber an existing output path unless `--force` was given,
/// and delegates the actual container encoding to [`crate::encrypt_file`].
pub fn run_encrypt(
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

    let password = get_passphrase(password_arg, true, no_interaction).map_err(|e| anyhow::anyhow!(e))?;

    engine::encrypt_file(input, output, &password, buffer_size).context("encryption failed")?;

    info(
        output_config,
        &format!("Encrypted {} to {}", input.display(), output.display()),
    );
    Ok(())
}
