pub mod channel;
pub mod embed;
pub mod extract;
pub mod placement;

use thiserror::Error;

pub use channel::{Decoder, Encoder};
pub use placement::Placement;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StegoError {
    #[error("character {ch:?} (value {}) is outside 1..={max} for this encoder", *ch as u32)]
    ValueOutOfRange { ch: char, max: u32 },
    #[error("no channel of the target pixel can carry {ch:?}")]
    ChannelOverflow { ch: char },
    #[error("secret has {chars} characters but the image only has {pixels} pixels")]
    CapacityExceeded { chars: usize, pixels: usize },
    #[error("images differ in size: {}x{} vs {}x{}", original.0, original.1, altered.0, altered.1)]
    DimensionMismatch {
        original: (u32, u32),
        altered: (u32, u32),
    },
}
