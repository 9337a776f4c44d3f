//! Hiding a secret inside an image.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use image::RgbImage;
use rand::Rng;
use tracing::{debug, info};

use super::{Encoder, Placement, StegoError};
use crate::constants::OUTPUT_PREFIX;
use crate::io::{picture, secret};

/// Everything needed to hide one secret file inside one image file.
#[derive(Debug, Clone)]
pub struct EncodeJob {
    pub image_path: PathBuf,
    pub secret_path: PathBuf,
    pub placement: Placement,
    pub encoder: Encoder,
    pub output_dir: PathBuf,
}

/// Writes each character of `secret` into its own pixel of `image`.
/// Returns the number of characters stored.
pub fn embed<R: Rng>(
    image: &mut RgbImage,
    secret: &str,
    placement: Placement,
    encoder: Encoder,
    rng: &mut R,
) -> Result<usize, StegoError> {
    let chars: Vec<char> = secret.chars().collect();
    let max = encoder.max_value();
    if let Some(&ch) = chars.iter().find(|c| **c as u32 == 0 || **c as u32 > max) {
        return Err(StegoError::ValueOutOfRange { ch, max });
    }

    let width = image.width() as usize;
    let pixels = width * image.height() as usize;
    let indices = placement.indices(chars.len(), pixels, rng)?;

    for (idx, ch) in indices.into_iter().zip(chars.iter().copied()) {
        let (x, y) = ((idx % width) as u32, (idx / width) as u32);
        encoder.encode(ch, image.get_pixel_mut(x, y), rng)?;
    }
    debug!(chars = chars.len(), pixels, "secret embedded");
    Ok(chars.len())
}

/// `<output_dir>/output-<stem>.png` for the given input image.
pub fn output_path(
    image_path: &Path,
    output_dir: &Path,
) -> PathBuf {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    output_dir.join(format!("{OUTPUT_PREFIX}{stem}.png"))
}

/// Reads the secret and the image, embeds, and writes the altered image.
/// Status lines go to `out`; the path of the written image is returned.
pub fn encode_file<R: Rng, W: Write>(
    job: &EncodeJob,
    rng: &mut R,
    out: &mut W,
) -> Result<PathBuf> {
    let secret = secret::read_secret(&job.secret_path)?;
    writeln!(out, "{} - Storing secret into image...", job.placement.label())?;

    let mut image = picture::load_rgb(&job.image_path)?;
    let stored = embed(&mut image, &secret, job.placement, job.encoder, rng)
        .with_context(|| format!("Cannot hide secret in {}", job.image_path.display()))?;

    fs::create_dir_all(&job.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            job.output_dir.display()
        )
    })?;
    let dest = output_path(&job.image_path, &job.output_dir);
    picture::save_png(&image, &dest)?;
    let dest = dunce::canonicalize(&dest).unwrap_or(dest);

    info!(stored, path = %dest.display(), "altered image written");
    writeln!(out, "Done!")?;
    Ok(dest)
}
