//! End-to-end optimization runs against real PNG/JPEG fixtures
//!
//! These tests drive the binary with the native backend, which needs no
//! external tools. Assertions stick to the batch invariants (replace only
//! when smaller, originals never corrupted, temp files cleaned up) rather
//! than exact byte counts, which vary by encoder version.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

mod common;

/// Standard project layout: two candidate directories, keep-larger siblings
/// so WebP output is deterministic regardless of relative sizes.
fn setup_project(files: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("assets")).unwrap();
    std::fs::create_dir_all(temp.path().join("public/assets")).unwrap();

    let file_list = files
        .iter()
        .map(|f| format!("\"{}\"", f))
        .collect::<Vec<_>>()
        .join(", ");

    common::write_config(
        temp.path(),
        &format!(
            "backend = \"native\"\nfiles = [{}]\ndirectories = [\"assets\", \"public/assets\"]\n\n[webp]\nenabled = true\nkeep-larger = true\n",
            file_list
        ),
    );

    temp
}

fn img_slim() -> Command {
    Command::cargo_bin("img-slim").unwrap()
}

#[test]
fn test_optimize_run_reports_per_file_and_summary() {
    let temp = setup_project(&["fixture.png"]);
    common::write_png_fixture(&temp.path().join("assets/fixture.png"), 64, 64);

    img_slim()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fixture.png"))
        .stdout(predicate::str::contains("Size before:"))
        .stdout(predicate::str::contains("Summary"))
        .stdout(predicate::str::contains("Original total:"))
        .stdout(predicate::str::contains("Optimized total:"))
        .stdout(predicate::str::contains("Optimization complete!"));
}

#[test]
fn test_optimize_never_grows_the_original() {
    let temp = setup_project(&["fixture.png"]);
    let fixture = temp.path().join("assets/fixture.png");
    common::write_png_fixture(&fixture, 96, 96);
    let size_before = std::fs::metadata(&fixture).unwrap().len();

    img_slim()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .success();

    let size_after = std::fs::metadata(&fixture).unwrap().len();
    assert!(
        size_after <= size_before,
        "replace-if-smaller violated: {} -> {}",
        size_before,
        size_after
    );

    // The file must still be a decodable PNG of the same dimensions
    assert_eq!(image::image_dimensions(&fixture).unwrap(), (96, 96));
}

#[test]
fn test_optimize_creates_webp_sibling_with_keep_larger_policy() {
    let temp = setup_project(&["fixture.png"]);
    common::write_png_fixture(&temp.path().join("assets/fixture.png"), 64, 64);

    img_slim()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("assets/fixture.webp").exists());
}

#[test]
fn test_optimize_is_idempotent_on_second_run() {
    let temp = setup_project(&["fixture.png"]);
    let fixture = temp.path().join("assets/fixture.png");
    common::write_png_fixture(&fixture, 64, 64);

    img_slim()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .success();
    let bytes_after_first = std::fs::read(&fixture).unwrap();

    img_slim()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .success();
    let bytes_after_second = std::fs::read(&fixture).unwrap();

    // Second run re-encodes to the same candidate, which is never strictly
    // smaller than the file it came from, so the file stays untouched.
    assert_eq!(bytes_after_first, bytes_after_second);
}

#[test]
fn test_optimize_leaves_no_tmp_artifacts() {
    let temp = setup_project(&["fixture.png", "photo.jpg"]);
    common::write_png_fixture(&temp.path().join("assets/fixture.png"), 64, 64);
    common::write_jpeg_fixture(&temp.path().join("public/assets/photo.jpg"), 48, 48);

    img_slim()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .success();

    let leftovers = common::tmp_leftovers(temp.path());
    assert!(leftovers.is_empty(), "tmp leftovers: {:?}", leftovers);
}

#[test]
fn test_optimize_excludes_missing_files_from_run() {
    let temp = setup_project(&["fixture.png", "ghost.png"]);
    common::write_png_fixture(&temp.path().join("assets/fixture.png"), 64, 64);

    img_slim()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fixture.png"))
        .stdout(predicate::str::contains("ghost.png").not());

    // No side effects for the missing file in either directory
    assert!(!temp.path().join("assets/ghost.png").exists());
    assert!(!temp.path().join("assets/ghost.webp").exists());
    assert!(!temp.path().join("public/assets/ghost.png").exists());
}

#[test]
fn test_optimize_processes_file_present_in_both_directories() {
    let temp = setup_project(&["fixture.png"]);
    common::write_png_fixture(&temp.path().join("assets/fixture.png"), 64, 64);
    common::write_png_fixture(&temp.path().join("public/assets/fixture.png"), 32, 32);

    img_slim()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("assets/fixture.webp").exists());
    assert!(temp.path().join("public/assets/fixture.webp").exists());
}

#[test]
fn test_optimize_handles_jpeg_files() {
    let temp = setup_project(&["photo.jpg"]);
    let fixture = temp.path().join("assets/photo.jpg");
    common::write_jpeg_fixture(&fixture, 64, 64);
    let size_before = std::fs::metadata(&fixture).unwrap().len();

    img_slim()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(std::fs::metadata(&fixture).unwrap().len() <= size_before);
    assert!(temp.path().join("assets/photo.webp").exists());
}

#[test]
fn test_optimize_skips_unsupported_extension_without_rewriting() {
    let temp = setup_project(&["vector.svg"]);
    let fixture = temp.path().join("assets/vector.svg");
    std::fs::write(&fixture, "<svg></svg>").unwrap();

    img_slim()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped"));

    assert_eq!(std::fs::read_to_string(&fixture).unwrap(), "<svg></svg>");
    assert!(!temp.path().join("assets/vector.webp").exists());
}

#[test]
fn test_optimize_dry_run_lists_files_without_touching_them() {
    let temp = setup_project(&["fixture.png"]);
    let fixture = temp.path().join("assets/fixture.png");
    common::write_png_fixture(&fixture, 64, 64);
    let original_bytes = std::fs::read(&fixture).unwrap();

    img_slim()
        .arg("optimize")
        .arg("--dry-run")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN]"))
        .stdout(predicate::str::contains("Would optimize"));

    assert_eq!(std::fs::read(&fixture).unwrap(), original_bytes);
    assert!(!temp.path().join("assets/fixture.webp").exists());
}

#[test]
fn test_optimize_json_output_includes_totals_and_files() {
    let temp = setup_project(&["fixture.png"]);
    common::write_png_fixture(&temp.path().join("assets/fixture.png"), 64, 64);

    img_slim()
        .arg("optimize")
        .arg("--json")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_before\""))
        .stdout(predicate::str::contains("\"total_after\""))
        .stdout(predicate::str::contains("\"files\""));
}

#[test]
fn test_optimize_backend_flag_overrides_config() {
    // Config says cli; flag forces native so no external tools are needed.
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("assets")).unwrap();
    common::write_config(
        temp.path(),
        "backend = \"cli\"\nfiles = [\"fixture.png\"]\ndirectories = [\"assets\"]\n",
    );
    common::write_png_fixture(&temp.path().join("assets/fixture.png"), 64, 64);

    img_slim()
        .arg("optimize")
        .arg("--backend")
        .arg("native")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("native"));
}
