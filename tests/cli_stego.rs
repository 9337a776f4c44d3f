mod common;
use assert_fs::prelude::*;
use common::stego_fs;
use predicates::str::contains;

#[test]
fn encode_then_decode_round_trips() {
    let secret = "meet me by the old oak tree";
    let dir = stego_fs(secret);

    assert_cmd::cargo::cargo_bin_cmd!("stegbox")
        .current_dir(&dir)
        .args([
            "encode",
            "inputs/house.png",
            "secret.txt",
            "spread",
            "split",
            "--seed",
            "9",
        ])
        .assert()
        .success()
        .stdout(contains("SPREAD - Storing secret into image..."))
        .stdout(contains("Done!"));

    dir.child("outputs/output-house.png")
        .assert(predicates::path::exists());

    assert_cmd::cargo::cargo_bin_cmd!("stegbox")
        .current_dir(&dir)
        .args([
            "decode",
            "inputs/house.png",
            "outputs/output-house.png",
            "split",
            "--save",
        ])
        .assert()
        .success()
        .stdout(contains(format!("The secret is:\n\n{secret}\n")));

    dir.child("output-secret.txt").assert(secret);
}

#[test]
fn encode_honours_output_dir() {
    let dir = stego_fs("hi");

    assert_cmd::cargo::cargo_bin_cmd!("stegbox")
        .current_dir(&dir)
        .args([
            "encode",
            "inputs/house.png",
            "secret.txt",
            "seq",
            "simple",
            "--output",
            "nested/out",
        ])
        .assert()
        .success()
        .stdout(contains("SEQ - Storing secret into image..."));

    dir.child("nested/out/output-house.png")
        .assert(predicates::path::exists());
}

#[test]
fn secret_larger_than_image_fails() {
    let dir = stego_fs("five!");

    assert_cmd::cargo::cargo_bin_cmd!("stegbox")
        .current_dir(&dir)
        .args(["encode", "inputs/tiny.png", "secret.txt", "seq", "simple"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("only has 4 pixels"));

    dir.child("outputs/output-tiny.png")
        .assert(predicates::path::missing());
}

#[test]
fn decode_rejects_mismatched_images() {
    let dir = stego_fs("x");

    assert_cmd::cargo::cargo_bin_cmd!("stegbox")
        .current_dir(&dir)
        .args(["decode", "inputs/house.png", "inputs/tiny.png", "simple"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("images differ in size"));
}

#[test]
fn unknown_encoder_is_a_usage_error() {
    let dir = stego_fs("x");

    assert_cmd::cargo::cargo_bin_cmd!("stegbox")
        .current_dir(&dir)
        .args(["encode", "inputs/house.png", "secret.txt", "seq", "fancy"])
        .assert()
        .failure()
        .code(2);
}
