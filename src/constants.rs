// Centralized magic numbers & default values
pub const DEFAULT_OUTPUT_DIR: &str = "./outputs";
pub const OUTPUT_PREFIX: &str = "output-";
pub const DEFAULT_SECRET_FILE: &str = "output-secret.txt";

pub const LOG_ENV: &str = "STEGBOX_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const EXIT_FAILURE: u8 = 1;

/// Largest value a single channel can carry.
pub const SIMPLE_MAX: u32 = u8::MAX as u32;
/// Largest value spread over all three channels.
pub const SPLIT_MAX: u32 = 3 * u8::MAX as u32;
