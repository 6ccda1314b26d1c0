use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with its config file pointed into `dir`.
fn shelf(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_CONFIG", dir.path().join("config.json"));
    cmd
}

fn write_png(path: &Path) {
    image::RgbImage::new(16, 16).save(path).unwrap();
}

#[test]
fn test_extract_json() {
    let dir = TempDir::new().unwrap();

    let output = shelf(&dir)
        .args([
            "extract",
            "brand: Acme, use by 11/06/2024, 3 objects",
            "--format",
            "json",
            "--at",
            "2024-06-01T12:00:00",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["brand_name"], "Acme");
    assert_eq!(json["expiry_date"]["raw"], "11/06/2024");
    assert_eq!(json["expiry_date"]["date"], "2024-06-11");
    assert_eq!(json["expired"], false);
    assert_eq!(json["life_span_days"], 9);
    assert_eq!(json["object_count"], 3);
}

#[test]
fn test_extract_text_absent_fields() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .args(["extract", "a photo of a cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brand Name: Not found"))
        .stdout(predicate::str::contains("Expired: Unknown"))
        .stdout(predicate::str::contains("Expected Life Span in Days: N/A"));
}

#[test]
fn test_extract_past_date() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .args(["extract", "best before 15/01/2020"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expiry Date: 15/01/2020"))
        .stdout(predicate::str::contains("Expired: Yes"));
}

#[test]
fn test_extract_from_stdin() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .args(["extract", "--format", "csv"])
        .write_stdin("3 items")
        .assert()
        .success()
        .stdout(predicate::str::contains(",,,,3"));
}

#[test]
fn test_extract_missing_file() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .args(["extract", "--file"])
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_scan_mock() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("label.png");
    write_png(&image);

    shelf(&dir)
        .arg("scan")
        .arg(&image)
        .args(["--query", "Acme brand, 4 items", "--at", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brand Name: Acme"))
        .stdout(predicate::str::contains("Object Count: 4"))
        .stdout(predicate::str::contains(
            "Image description: [Mock description of the uploaded image]",
        ));
}

#[test]
fn test_scan_sidecar() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("jar.jpg");
    image::RgbImage::new(8, 8).save(&image).unwrap();
    std::fs::write(dir.path().join("jar.jpg.txt"), "a jar, brand: Honeycomb").unwrap();

    let output = shelf(&dir)
        .arg("scan")
        .arg(&image)
        .args(["--generator", "sidecar", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["generator"], "sidecar");
    assert_eq!(json["result"]["brand_name"], "Honeycomb");
}

#[test]
fn test_scan_rejects_unsupported_type() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("label.gif");
    std::fs::write(&file, b"GIF89a").unwrap();

    shelf(&dir)
        .arg("scan")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported image type: gif"));
}

#[test]
fn test_batch_summary() {
    let dir = TempDir::new().unwrap();
    write_png(&dir.path().join("a.png"));
    write_png(&dir.path().join("b.png"));
    image::RgbImage::new(16, 16).save(dir.path().join("a.jpg")).unwrap();
    let out_dir = dir.path().join("out");

    shelf(&dir)
        .arg("batch")
        .arg(dir.path().join("*.*").to_string_lossy().to_string())
        .arg("--output-dir")
        .arg(&out_dir)
        .args(["--summary", "--query", "2 objects"])
        .assert()
        .success();

    assert!(out_dir.join("a.png.json").exists());
    assert!(out_dir.join("a.jpg.json").exists());
    assert!(out_dir.join("b.png.json").exists());

    let summary = std::fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(
        lines[0],
        "file,brand_name,expiry_date,expired,life_span_days,object_count,error"
    );
    assert_eq!(lines.len(), 4);
    assert!(lines[1].ends_with(",,,,2,"));
}

#[test]
fn test_batch_no_matches() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .arg("batch")
        .arg(dir.path().join("*.png").to_string_lossy().to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files found"));
}

#[test]
fn test_config_init_get_set() {
    let dir = TempDir::new().unwrap();

    shelf(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.json").exists());

    shelf(&dir)
        .args(["config", "get", "generation.generator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mock\""));

    shelf(&dir)
        .args(["config", "set", "generation.generator", "sidecar"])
        .assert()
        .success();

    shelf(&dir)
        .args(["config", "get", "generation.generator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sidecar\""));

    shelf(&dir)
        .args(["config", "set", "generation.generator", "llama"])
        .assert()
        .failure();
}

#[test]
fn test_config_flag_selects_file() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("custom.json");
    std::fs::write(&custom, r#"{ "generation": { "generator": "sidecar" } }"#).unwrap();

    shelf(&dir)
        .arg("--config")
        .arg(&custom)
        .args(["config", "get", "generation.generator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sidecar\""));

    shelf(&dir)
        .arg("--config")
        .arg(&custom)
        .args(["config", "set", "extraction.warn_on_missing", "false"])
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&custom).unwrap()).unwrap();
    assert_eq!(saved["extraction"]["warn_on_missing"], false);
    assert_eq!(saved["generation"]["generator"], "sidecar");
    assert!(!dir.path().join("config.json").exists());
}
