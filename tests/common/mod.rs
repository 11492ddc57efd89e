//! Shared helpers for integration tests

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgb};

/// Write a real, decodable PNG fixture with a simple gradient pattern
pub fn write_png_fixture(path: &Path, width: u32, height: u32) {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(path).expect("failed to write PNG fixture");
}

/// Write a real, decodable JPEG fixture
pub fn write_jpeg_fixture(path: &Path, width: u32, height: u32) {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 3 % 256) as u8, 90u8, (y * 7 % 256) as u8])
    });
    img.save(path).expect("failed to write JPEG fixture");
}

/// Write a .img-slim.toml into `root`
pub fn write_config(root: &Path, contents: &str) {
    std::fs::write(root.join(".img-slim.toml"), contents).expect("failed to write config");
}

/// Collect any leftover `*.tmp` artifacts under `dir`
pub fn tmp_leftovers(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return found,
    };
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_dir() {
            found.extend(tmp_leftovers(&path));
        } else if path.extension().map(|x| x == "tmp").unwrap_or(false) {
            found.push(path);
        }
    }
    found
}
