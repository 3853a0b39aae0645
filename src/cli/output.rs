//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (console respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: secret paths, hints
//! - Dimmed: secondary info

use std::fmt::Display;

use console::style;

/// Print a success message with checkmark (green).
///
/// Example: `✓ added email/work`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ secret not found: email/work`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
///
/// Example: `⚠ restoring removed history`
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run: grotto init <repository> --key <key-file>`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  repository:  /home/user/store`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a dimmed/secondary message.
///
/// Example: `nothing removed`
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Format a secret path for inline use (cyan).
pub fn secret(path: impl Display) -> String {
    style(path).cyan().to_string()
}
