use clap::ValueEnum;
use rand::Rng;

use super::StegoError;

/// Strategy choosing which pixels carry the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Placement {
    /// Store data in consecutive pixels from the top-left corner.
    #[value(name = "seq")]
    Sequential,
    /// Spread data throughout the image.
    Spread,
}

impl Placement {
    pub fn label(self) -> &'static str {
        match self {
            Placement::Sequential => "SEQ",
            Placement::Spread => "SPREAD",
        }
    }

    /// Row-major pixel indices for `chars` characters in an image of
    /// `pixels` pixels. Indices are strictly increasing.
    pub fn indices<R: Rng>(
        self,
        chars: usize,
        pixels: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, StegoError> {
        if chars == 0 {
            return Ok(Vec::new());
        }
        if chars > pixels {
            return Err(StegoError::CapacityExceeded { chars, pixels });
        }
        match self {
            Placement::Sequential => Ok((0..chars).collect()),
            Placement::Spread => {
                // Each character owns a slot of `interval` pixels and lands
                // somewhere inside it.
                let interval = pixels / chars;
                Ok((0..chars)
                    .map(|i| i * interval + rng.random_range(0..interval))
                    .collect())
            }
        }
    }
}
