//! Formatting helpers for console output and exports.
//!
//! - Percentages are rendered with one decimal place ("40.0%")
//! - Timestamps use the persisted `YYYY-MM-DD HH:MM:SS` layout
//! - A missing timestamp renders as "N/A"
//!
//! ```rust
//! use tasl::libs::formatter::format_percent;
//!
//! assert_eq!(format_percent(0.4), "40.0%");
//! ```

use super::task::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;

/// Placeholder shown where a timestamp is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats a ratio in `0.0..=1.0` as a percentage. Out-of-range values are clamped.
pub fn format_percent(ratio: f64) -> String {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    format!("{:.1}%", ratio * 100.0)
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_optional_timestamp(timestamp: Option<&NaiveDateTime>) -> String {
    timestamp.map(format_timestamp).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Text-mode progress bar, `width` cells wide.
pub fn format_progress_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let filled = (ratio * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
