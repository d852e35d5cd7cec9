//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Format characters as a bracketed list, e.g. `[A, E]`
#[must_use]
pub fn format_char_list(chars: &[char]) -> String {
    let items: Vec<String> = chars.iter().map(char::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Pattern cells separated by spaces, e.g. `_ _ A _ E`
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    let cells: Vec<String> = pattern.to_chars().iter().map(char::to_string).collect();
    cells.join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Clamped to [0, width] before the cast
    let filled = ((value / max) * width as f64).clamp(0.0, width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `part` in `total`, zero when `total` is zero
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_list_formats() {
        assert_eq!(format_char_list(&['A', 'E']), "[A, E]");
        assert_eq!(format_char_list(&['_', '_', 'E']), "[_, _, E]");
        assert_eq!(format_char_list(&[]), "[]");
    }

    #[test]
    fn spaced_pattern_formats() {
        let pattern: Pattern = "__A_E".parse().unwrap();
        assert_eq!(spaced_pattern(&pattern), "_ _ A _ E");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn percentage_handles_zero_total() {
        assert!(percentage(3, 0).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
