//! Command-line interface for encrypting and decrypting files in the AES
//! Crypt v2 container format.
//!
//! This module is an external collaborator over the core codec: it owns
//! interactive prompting, path conventions, and progress output, none of
//! which the core (`crate::encrypt_file`/`crate::decrypt_file`) knows about.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

mod decrypt;
mod encrypt;
mod key_handling;
mod output;
mod paths;

pub use paths::derive_output_path;

use output::OutputConfig;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RELEASE_DATE"), ")");

/// Default streaming buffer size (64 KiB), matching the reference
/// implementation's default.
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Looks up the process exit code for an error returned by [`run`]. Core
/// codec errors get the distinct code named in `AesCryptError::exit_code`;
/// anything else (bad arguments, a refused overwrite, a failed prompt) is 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<crate::error::AesCryptError>()
        .map(|e| e.exit_code())
        .unwrap_or(1)
}

#[derive(Parser)]
#[command(name = "raescrypt")]
#[command(about = "Encrypt and decrypt files in the AES Crypt v2 container format")]
#[command(version = VERSION)]
pub struct Cli {
    /// Overwrite an existing output file
    #[arg(long, global = true)]
    pub force: bool,

    /// Only errors are displayed; all other output is suppressed
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Do not ask any interactive question (password must be supplied via --password)
    #[arg(short = 'n', long = "no-interaction", global = true)]
    pub no_interaction: bool,

    /// Increase verbosity: once for normal output, twice for more detail, three times for debug
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a file, producing an AES Crypt v2 container
    Encrypt {
        /// Path to the plaintext file
        #[arg(long)]
        input: PathBuf,
        /// Output path (default: <input>.aes)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Encryption password (will prompt if not provided)
        #[arg(long)]
        password: Option<String>,
        /// Streaming buffer size in bytes; must be a positive multiple of 16
        #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE)]
        buffer_size: usize,
    },
    /// Decrypt an AES Crypt v2 container
    Decrypt {
        /// Path to the encrypted file
        #[arg(long)]
        input: PathBuf,
        /// Output path (default: <input> with a trailing .aes stripped)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Decryption password (will prompt if not provided)
        #[arg(long)]
        password: Option<String>,
        /// Streaming buffer size in bytes; must be a positive multiple of 16
        #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE)]
        buffer_size: usize,
    },
}

/// Parses `args` and runs the requested subcommand.
pub fn run<I>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = String>,
{
    let cli = Cli::parse_from(args);
    let output_config = OutputConfig::new(cli.quiet, cli.verbose);

    match cli.command {
        Commands::Encrypt {
            input,
            output,
            password,
            buffer_size,
        } => {
            let output = output
                .or_else(|| derive_output_path(&input, true))
                .ok_or_else(|| anyhow::anyhow!("could not derive an output path; pass --output"))?;
            encrypt::run_encrypt(
                &input,
                &output,
                password.as_deref(),
                buffer_size,
                cli.force,
                cli.no_interaction,
                &output_config,
            )
        }
        Commands::Decrypt {
            input,
            output,
            password,
            buffer_size,
        } => {
            let output = output.or_else(|| derive_output_path(&input, false)).ok_or_else(|| {
                anyhow::anyhow!("could not derive an output path (input doesn't end in .aes); pass --output")
            })?;
            decrypt::run_decrypt(
                &input,
                &output,
                password.as_deref(),
                buffer_size,
                cli.force,
                cli.no_interaction,
                &output_config,
            )
        }
    }
}
