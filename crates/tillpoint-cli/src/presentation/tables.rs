//! Table formatting utilities for CLI output.

/// Truncate to at most `max_len` characters, ending in "..." when cut.
///
/// ```rust
/// use tillpoint_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Latte", 10), "Latte");
/// assert_eq!(truncate_string("Pain au chocolat", 8), "Pain ...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}
