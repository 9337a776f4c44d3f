#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};
use image::{Rgb, RgbImage};

/// Builds a fixture tree:
/// root/
///   inputs/house.png   (64x48 gradient)
///   inputs/tiny.png    (2x2 solid)
///   secret.txt
pub fn stego_fs(secret: &str) -> TempDir {
    let td = TempDir::new().unwrap();
    let inputs = td.child("inputs");
    inputs.create_dir_all().unwrap();

    gradient(64, 48).save(inputs.child("house.png").path()).unwrap();
    RgbImage::from_pixel(2, 2, Rgb([90, 90, 90]))
        .save(inputs.child("tiny.png").path())
        .unwrap();

    td.child("secret.txt").write_str(secret).unwrap();
    td
}

pub fn gradient(
    w: u32,
    h: u32,
) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        Rgb([
            (x * 5 % 256) as u8,
            (y * 11 % 256) as u8,
            ((x * y) % 256) as u8,
        ])
    })
}
