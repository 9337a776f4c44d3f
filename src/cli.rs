use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_SECRET_FILE};
use crate::stego::{Decoder, Encoder, Placement};

#[derive(Parser, Debug)]
#[command(name = "stegbox", version)]
#[command(
    about = "Probe files, or hide a text secret in an image and get it back. \
             Without a subcommand, reads a file name from stdin and probes it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a file, report its size and read it fully into memory.
    Probe {
        /// File to probe; read from stdin when omitted.
        path: Option<PathBuf>,
    },
    /// Encode a secret into an image.
    Encode {
        /// Path of image
        image_path: PathBuf,
        /// Path of secret text file
        secret_text_path: PathBuf,
        /// Where in the image the characters go.
        #[arg(value_enum)]
        store: Placement,
        /// How a single pixel is altered.
        #[arg(value_enum)]
        encoder: Encoder,
        /// Output dir
        #[arg(long = "output", default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
        /// Seed for the random channel and pixel choices.
        #[arg(long = "seed")]
        seed: Option<u64>,
    },
    /// Retrieve a secret by comparing the source image to the altered image.
    Decode {
        /// Path of original image
        original_image_path: PathBuf,
        /// Path of altered image
        altered_image_path: PathBuf,
        #[arg(value_enum)]
        decoder: Decoder,
        /// Save the secret to a file.
        #[arg(
            short = 's',
            long = "save",
            num_args = 0..=1,
            default_missing_value = DEFAULT_SECRET_FILE
        )]
        save: Option<PathBuf>,
    },
}
