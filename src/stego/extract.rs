//! Recovering a secret by diffing the original image against the altered one.

use std::{io::Write, path::Path};

use anyhow::Result;
use image::RgbImage;
use tracing::{debug, info};

use super::{Decoder, StegoError};
use crate::io::{picture, secret};

/// Scans both images in row-major order and decodes every pixel that
/// differs.
pub fn extract(
    original: &RgbImage,
    altered: &RgbImage,
    decoder: Decoder,
) -> Result<String, StegoError> {
    if original.dimensions() != altered.dimensions() {
        return Err(StegoError::DimensionMismatch {
            original: original.dimensions(),
            altered: altered.dimensions(),
        });
    }

    let mut secret = String::new();
    for (o, a) in original.pixels().zip(altered.pixels()) {
        if o == a {
            continue;
        }
        // At most 3 * 255, always a scalar value.
        let value = decoder.decode(o, a);
        secret.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
    }
    debug!(chars = secret.chars().count(), "secret extracted");
    Ok(secret)
}

/// Loads both images, extracts the secret and prints it to `out`. When
/// `save` is set the secret is also written there.
pub fn decode_files<W: Write>(
    original_path: &Path,
    altered_path: &Path,
    decoder: Decoder,
    save: Option<&Path>,
    out: &mut W,
) -> Result<String> {
    writeln!(out, "Decoding image.")?;

    let original = picture::load_rgb(original_path)?;
    let altered = picture::load_rgb(altered_path)?;
    let found = extract(&original, &altered, decoder)?;

    writeln!(out, "The secret is:\n\n{found}\n")?;

    if let Some(path) = save {
        secret::write_secret(path, &found)?;
        info!(path = %path.display(), "secret saved");
    }
    Ok(found)
}
