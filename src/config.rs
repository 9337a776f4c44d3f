use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::constants::{DEFAULT_LOG_LEVEL, LOG_ENV};
use crate::stego::{Decoder, embed::EncodeJob};

/// What the binary was asked to do.
#[derive(Debug, Clone)]
pub enum Mode {
    /// `path` is `None` when the file name should come from stdin.
    Probe { path: Option<PathBuf> },
    Encode { job: EncodeJob, seed: Option<u64> },
    Decode {
        original: PathBuf,
        altered: PathBuf,
        decoder: Decoder,
        save: Option<PathBuf>,
    },
}

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Self {
        Self::from(Cli::parse())
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let mode = match cli.command {
            None => Mode::Probe { path: None },
            Some(Command::Probe { path }) => Mode::Probe { path },
            Some(Command::Encode {
                image_path,
                secret_text_path,
                store,
                encoder,
                output,
                seed,
            }) => Mode::Encode {
                job: EncodeJob {
                    image_path,
                    secret_path: secret_text_path,
                    placement: store,
                    encoder,
                    output_dir: output,
                },
                seed,
            },
            Some(Command::Decode {
                original_image_path,
                altered_image_path,
                decoder,
                save,
            }) => Mode::Decode {
                original: original_image_path,
                altered: altered_image_path,
                decoder,
                save,
            },
        };
        Config { mode }
    }
}

/// Logs go to stderr so stdout carries only status lines. `STEGBOX_LOG`
/// takes precedence over `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
