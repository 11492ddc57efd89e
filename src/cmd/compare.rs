//! Compare command implementation
//!
//! Handles the `img-slim compare` command which compares two image files
//! to show the size difference, e.g. an original against its optimized or
//! WebP counterpart.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::error::ImgSlimError;
use crate::fmt::{format_bytes, percent_saved, CHART};
use crate::infra::{FileSystem, RealFileSystem};

/// Compare two image files and show the size delta
///
/// # Examples
///
/// ```no_run
/// use img_slim::cmd::compare::cmd_compare;
///
/// cmd_compare("assets/hero.png", "assets/hero.webp")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if either file doesn't exist
pub fn cmd_compare(before: &str, after: &str) -> Result<()> {
    let fs = RealFileSystem;
    let before_path = Path::new(before);
    let after_path = Path::new(after);

    // Verify files exist first; the baseline is checked before the comparison
    if !fs.exists(before_path) {
        return Err(ImgSlimError::FileNotFound {
            path: before_path.to_path_buf(),
            operation: "compare (baseline)".to_string(),
        }
        .into());
    }
    if !fs.exists(after_path) {
        return Err(ImgSlimError::FileNotFound {
            path: after_path.to_path_buf(),
            operation: "compare".to_string(),
        }
        .into());
    }

    let before_bytes = fs.file_size(before_path);
    let after_bytes = fs.file_size(after_path);

    println!("{} {} Size Comparison", CHART, style("img-slim").bold());
    println!();
    println!(
        "   {} Before: {} ({})",
        style("→").dim(),
        before,
        style(format_bytes(before_bytes)).yellow()
    );
    println!(
        "   {} After:  {} ({})",
        style("→").dim(),
        after,
        style(format_bytes(after_bytes)).green().bold()
    );

    if after_bytes < before_bytes {
        println!(
            "   {} Saved:  {} ({:.1}% reduction)",
            style("→").dim(),
            style(format_bytes(before_bytes - after_bytes)).green().bold(),
            percent_saved(before_bytes, after_bytes)
        );
    } else if after_bytes > before_bytes {
        println!(
            "   {} Grew:   {} ({:.1}%)",
            style("→").dim(),
            style(format_bytes(after_bytes - before_bytes)).red(),
            -percent_saved(before_bytes, after_bytes)
        );
    } else {
        println!("   {} No size difference", style("→").dim());
    }

    Ok(())
}
