//! Init command implementation
//!
//! Handles the `img-slim init` command which creates a starter
//! configuration file in the current directory.

use anyhow::Result;
use console::style;
use std::env;

use crate::config::{self, ConfigFile};
use crate::fmt::{CHECKMARK, INFO, ROCKET};

/// Initialize img-slim configuration
///
/// Creates a `.img-slim.toml` with the default backend, candidate
/// directories and policy; the file list starts empty and is meant to be
/// filled in by hand.
///
/// # Examples
///
/// ```no_run
/// use img_slim::cmd::init::cmd_init;
///
/// cmd_init()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init() -> Result<()> {
    println!(
        "{} {} Initializing img-slim",
        ROCKET,
        style("img-slim init").bold()
    );
    println!();

    let project_root = env::current_dir()?;

    // Check if config file already exists
    if config::ConfigLoader::exists(&project_root) {
        println!(
            "{} Config file already exists: {}",
            style("⚠️").yellow(),
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(());
    }

    let starter = ConfigFile::default();
    config::ConfigLoader::save(&starter, &project_root)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(config::CONFIG_FILE_NAME).cyan().bold()
    );
    println!();
    println!("{}  Defaults:", INFO);
    println!(
        "   {} backend = {}",
        style("•").dim(),
        style("native").green()
    );
    for dir in &starter.directories {
        println!(
            "   {} candidate directory: {}",
            style("•").dim(),
            style(dir.display()).green()
        );
    }
    println!();
    println!("{}  Next Steps:", style("💡").bold());
    println!(
        "   1. Add the image file names to optimize to the {} list",
        style("files").cyan()
    );
    println!(
        "   2. Run {} to preview the batch",
        style("img-slim optimize --dry-run").cyan()
    );
    println!(
        "   3. Run {} to optimize",
        style("img-slim optimize").cyan()
    );

    Ok(())
}
