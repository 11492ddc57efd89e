//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Camera emoji for per-file report lines
pub const CAMERA: Emoji = Emoji("📷", ">");

/// Rocket emoji for launch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use img_slim::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Percentage saved between a before and after size
///
/// Returns 0.0 when `before` is zero, so callers never divide by zero on
/// unreadable files.
///
/// # Examples
///
/// ```
/// use img_slim::fmt::percent_saved;
///
/// assert_eq!(percent_saved(1000, 500), 50.0);
/// assert_eq!(percent_saved(0, 500), 0.0);
/// ```
pub fn percent_saved(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    ((before as i64 - after as i64) as f64 / before as f64) * 100.0
}
