use image::{Rgba, RgbaImage};
use std::process::Command;
use tempfile::TempDir;

#[test]
fn missing_collage_is_reported_and_the_run_continues() {
    let dir = TempDir::new().unwrap();
    RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]))
        .save(dir.path().join("collage_web.png"))
        .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_split-collage"))
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let missing = dir.path().join("collage_tech.png");
    assert!(
        stderr.contains(&format!("Error processing {}:", missing.display())),
        "{}",
        stderr
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected: Vec<_> = (1..=4)
        .map(|index| format!("Saved {}", dir.path().join(format!("web_{}.png", index)).display()))
        .collect();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);
}
