// ABOUTME: Utility functions for the exchange-site library
// ABOUTME: Provides HTML escaping, number formatting and output path helpers

use crate::errors::{Result, SiteError};
use std::path::Path;

/// Escape text for safe interpolation into HTML element content and attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(SiteError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory_exists(parent)?;
        }
    }
    Ok(())
}

/// Truncate text to at most `max_chars` characters, appending an ellipsis when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Format a count the way the page shows it: Arabic-Indic digits grouped by thousands
pub fn format_arabic_number(value: u64) -> String {
    let plain = value.to_string();
    let len = plain.len();
    let mut formatted = String::with_capacity(len * 3);
    for (i, c) in plain.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            formatted.push('٬');
        }
        let digit = c.to_digit(10).unwrap_or(0) as usize;
        formatted.push(ARABIC_INDIC_DIGITS[digit]);
    }
    formatted
}
