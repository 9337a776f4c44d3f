use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use tracing::debug;

/// Loads any supported image format and flattens it to 8-bit RGB.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to load image {}", path.display()))?
        .to_rgb8();
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "image loaded"
    );
    Ok(img)
}

/// Writes `img` as PNG so every pixel survives unchanged.
pub fn save_png(
    img: &RgbImage,
    path: &Path,
) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write image {}", path.display()))
}
