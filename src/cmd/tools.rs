//! Tools command implementation
//!
//! Handles the `img-slim tools` command which reports which external
//! compressors are available for the subprocess backend.

use anyhow::Result;

use crate::tools::ToolChain;

/// Check and report encoder tool availability
///
/// Prints one line per tool with its detected version, followed by install
/// instructions for anything missing. Exits non-zero when a required tool is
/// absent, so CI can gate on it.
///
/// # Examples
///
/// ```no_run
/// use img_slim::cmd::tools::cmd_tools;
///
/// cmd_tools()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_tools() -> Result<()> {
    let toolchain = ToolChain::new();
    toolchain.check_all()?;
    Ok(())
}
