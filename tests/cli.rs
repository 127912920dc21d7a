use std::path::Path;
use std::process::{Command, Output};

use image::{ImageFormat, Rgba, RgbaImage};

fn run(bin: &str, dir: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("DEBUG_MODE")
        .output()
        .unwrap()
}

fn poi_hex(dir: &Path, args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_poi-hex"), dir, args)
}

fn hex_to_png(dir: &Path, args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_hex_to_png"), dir, args)
}

#[test]
fn missing_image_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    for args in [&[][..], &["--image", ""][..]] {
        let output = poi_hex(dir.path(), args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("An image path must be set. Try --help for more information"),
            "{stderr}"
        );
    }
    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn zero_width_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let output = poi_hex(dir.path(), &["--width", "0", "--image", "x.png"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn unreadable_image_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = poi_hex(dir.path(), &["--image", "nope.png"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn converts_and_restores_through_the_binaries() {
    let dir = tempfile::tempdir().unwrap();
    RgbaImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 0])
        }
    })
    .save_with_format(dir.path().join("in.png"), ImageFormat::Png)
    .unwrap();

    let output = poi_hex(
        dir.path(),
        &["--image", "in.png", "--width", "2", "--height", "1", "--filter", "nearest"],
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("output.txt")).unwrap(),
        "\nconst unsigned int array1[] = {0xff0000, 0x000000, }; //end of array "
    );

    let output = hex_to_png(dir.path(), &["--width", "2", "--height", "1"]);
    assert_eq!(output.status.code(), Some(0));
    let restored = image::open(dir.path().join("from-hex.png")).unwrap().to_rgba8();
    assert_eq!(restored.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(restored.get_pixel(1, 0).0, [0, 0, 0, 255]);
}

#[test]
fn hex_to_png_rejects_zero_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let output = hex_to_png(dir.path(), &["--width", "0"]);
    assert_eq!(output.status.code(), Some(2));
}
