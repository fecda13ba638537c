//! Exit-code and filesystem behavior of the `pattern-pioneer` binary.

use std::path::Path;
use std::process::Command;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pattern-pioneer"));
    // Keep the user's config file out of the picture.
    cmd.env_remove("PATTERN_PIONEER_CONFIG")
        .env(
            "XDG_CONFIG_HOME",
            std::env::temp_dir().join("pattern-pioneer-no-config"),
        )
        .env("RUST_LOG", "warn");
    cmd
}

fn write_png(path: &Path, width: u32, height: u32) {
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 180, 160]))
        .save(path)
        .unwrap();
}

#[test]
fn test_missing_input_dir_exits_with_one() {
    let scratch = tempfile::tempdir().unwrap();
    let status = bin()
        .arg(scratch.path().join("nope"))
        .arg("--output-dir")
        .arg(scratch.path().join("out"))
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    assert!(!scratch.path().join("out").exists());
}

#[test]
fn test_optimizes_directory_and_exits_zero_despite_bad_file() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_png(&input.path().join("a.png"), 300, 200);
    std::fs::write(input.path().join("b.png"), b"garbage").unwrap();

    let status = bin()
        .arg(input.path())
        .arg("--output-dir")
        .arg(output.path())
        .args(["--max-size", "100", "--crop-zoom", "1.0"])
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(0));
    let written = image::open(output.path().join("pattern1.jpg")).unwrap();
    assert_eq!((written.width(), written.height()), (100, 67));
    assert!(!output.path().join("pattern2.jpg").exists());
}

#[test]
fn test_show_config_prints_toml() {
    let input = tempfile::tempdir().unwrap();
    let out = bin()
        .arg(input.path())
        .args(["--quality", "70", "--show-config"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("quality = 70"));
    assert!(stdout.contains("pattern1.jpg"));
}
