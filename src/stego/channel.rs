//! Per-pixel encoders: how one character changes one RGB pixel, and how the
//! change is read back.

use clap::ValueEnum;
use image::Rgb;
use rand::Rng;

use super::StegoError;
use crate::constants::{SIMPLE_MAX, SPLIT_MAX};

const CHANNELS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Encoder {
    /// Target one color channel to write data to.
    Simple,
    /// Split data between all three color channels.
    Split,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Decoder {
    /// Read the first changed channel.
    Simple,
    /// Sum the change over all channels. Also reads `simple` output.
    Split,
}

impl Encoder {
    /// Largest character value this encoder can carry in one pixel.
    pub fn max_value(self) -> u32 {
        match self {
            Encoder::Simple => SIMPLE_MAX,
            Encoder::Split => SPLIT_MAX,
        }
    }

    pub fn encode<R: Rng>(
        self,
        ch: char,
        pixel: &mut Rgb<u8>,
        rng: &mut R,
    ) -> Result<(), StegoError> {
        match self {
            Encoder::Simple => encode_simple(ch, pixel, rng),
            Encoder::Split => encode_split(ch, pixel),
        }
    }
}

impl Decoder {
    pub fn decode(
        self,
        original: &Rgb<u8>,
        altered: &Rgb<u8>,
    ) -> u32 {
        match self {
            Decoder::Simple => decode_simple(original, altered),
            Decoder::Split => decode_split(original, altered),
        }
    }
}

/// Moves `channel` by `delta`, upwards when that fits in a byte and
/// downwards otherwise.
fn shift(
    channel: u8,
    delta: u8,
) -> Option<u8> {
    channel
        .checked_add(delta)
        .or_else(|| channel.checked_sub(delta))
}

fn checked_value(
    ch: char,
    max: u32,
) -> Result<u32, StegoError> {
    let value = ch as u32;
    if value == 0 || value > max {
        return Err(StegoError::ValueOutOfRange { ch, max });
    }
    Ok(value)
}

/// Writes the whole value into a single, randomly chosen channel. When that
/// channel can go neither up nor down by the value, the next ones are tried.
pub fn encode_simple<R: Rng>(
    ch: char,
    pixel: &mut Rgb<u8>,
    rng: &mut R,
) -> Result<(), StegoError> {
    let delta = checked_value(ch, SIMPLE_MAX)? as u8;
    let start = rng.random_range(0..CHANNELS);
    for offset in 0..CHANNELS {
        let idx = (start + offset) % CHANNELS;
        if let Some(shifted) = shift(pixel.0[idx], delta) {
            pixel.0[idx] = shifted;
            return Ok(());
        }
    }
    Err(StegoError::ChannelOverflow { ch })
}

/// Splits `value` into three near-equal parts that sum to it. The larger
/// parts come first when the remainder is 2, last when it is 1.
pub fn split_value(value: u32) -> [u32; 3] {
    let q = value / 3;
    match value % 3 {
        0 => [q, q, q],
        1 => [q, q, q + 1],
        _ => [q + 1, q + 1, q],
    }
}

/// Spreads the value over all three channels. The pixel is left untouched
/// on error.
pub fn encode_split(
    ch: char,
    pixel: &mut Rgb<u8>,
) -> Result<(), StegoError> {
    let value = checked_value(ch, SPLIT_MAX)?;
    let mut out = *pixel;
    for (channel, part) in out.0.iter_mut().zip(split_value(value)) {
        *channel = shift(*channel, part as u8).ok_or(StegoError::ChannelOverflow { ch })?;
    }
    *pixel = out;
    Ok(())
}

pub fn decode_simple(
    original: &Rgb<u8>,
    altered: &Rgb<u8>,
) -> u32 {
    original
        .0
        .iter()
        .zip(altered.0.iter())
        .map(|(o, a)| o.abs_diff(*a) as u32)
        .find(|d| *d != 0)
        .unwrap_or(0)
}

pub fn decode_split(
    original: &Rgb<u8>,
    altered: &Rgb<u8>,
) -> u32 {
    original
        .0
        .iter()
        .zip(altered.0.iter())
        .map(|(o, a)| o.abs_diff(*a) as u32)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn split_parts_sum_to_value() {
        assert_eq!(split_value(99), [33, 33, 33]);
        assert_eq!(split_value(100), [33, 33, 34]);
        assert_eq!(split_value(101), [34, 34, 33]);
        assert_eq!(split_value(765), [255, 255, 255]);
        for v in 1..=SPLIT_MAX {
            assert_eq!(split_value(v).iter().sum::<u32>(), v);
        }
    }

    #[test]
    fn simple_adds_when_room_and_subtracts_near_top() {
        let mut rng = StdRng::seed_from_u64(7);

        let orig = Rgb([10, 10, 10]);
        let mut px = orig;
        encode_simple('A', &mut px, &mut rng).unwrap();
        assert_eq!(px.0.iter().filter(|c| **c == 10 + 65).count(), 1);
        assert_eq!(decode_simple(&orig, &px), 65);

        let orig = Rgb([250, 250, 250]);
        let mut px = orig;
        encode_simple('A', &mut px, &mut rng).unwrap();
        assert_eq!(px.0.iter().filter(|c| **c == 250 - 65).count(), 1);
        assert_eq!(decode_simple(&orig, &px), 65);
    }

    #[test]
    fn simple_falls_back_to_a_channel_that_fits() {
        let mut rng = StdRng::seed_from_u64(1);
        // 200 fits only in the last channel.
        let orig = Rgb([100, 100, 0]);
        let mut px = orig;
        encode_simple('\u{c8}', &mut px, &mut rng).unwrap();
        assert_eq!(px, Rgb([100, 100, 200]));
    }

    #[test]
    fn simple_rejects_unencodable_pixel() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut px = Rgb([100, 100, 100]);
        let err = encode_simple('\u{c8}', &mut px, &mut rng).unwrap_err();
        assert_eq!(err, StegoError::ChannelOverflow { ch: '\u{c8}' });
        assert_eq!(px, Rgb([100, 100, 100]));
    }

    #[test]
    fn simple_rejects_out_of_range_characters() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut px = Rgb([0, 0, 0]);
        assert!(matches!(
            encode_simple('\u{100}', &mut px, &mut rng),
            Err(StegoError::ValueOutOfRange { max: 255, .. })
        ));
        assert!(matches!(
            encode_simple('\0', &mut px, &mut rng),
            Err(StegoError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn split_carries_values_beyond_a_byte() {
        let orig = Rgb([0, 200, 255]);
        let mut px = orig;
        // 'ǅ' is 453, split as 151 each.
        encode_split('ǅ', &mut px).unwrap();
        assert_eq!(px, Rgb([151, 49, 104]));
        assert_eq!(decode_split(&orig, &px), 453);
    }

    #[test]
    fn split_leaves_pixel_alone_on_overflow() {
        let mut px = Rgb([0, 128, 128]);
        let err = encode_split('\u{2fd}', &mut px).unwrap_err();
        assert_eq!(err, StegoError::ChannelOverflow { ch: '\u{2fd}' });
        assert_eq!(px, Rgb([0, 128, 128]));
    }

    #[test]
    fn split_decoder_reads_simple_output() {
        let mut rng = StdRng::seed_from_u64(3);
        let orig = Rgb([40, 90, 200]);
        let mut px = orig;
        Encoder::Simple.encode('z', &mut px, &mut rng).unwrap();
        assert_eq!(Decoder::Split.decode(&orig, &px), 'z' as u32);
    }
}
