use std::{fs, path::Path};

use anyhow::{Context, Result};

pub fn read_secret(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read secret from {}", path.display()))
}

pub fn write_secret(
    path: &Path,
    secret: &str,
) -> Result<()> {
    fs::write(path, secret)
        .with_context(|| format!("Failed to save secret to {}", path.display()))
}
