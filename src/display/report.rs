//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the console report sections.

use crate::models::Money;

/// Format a percentage with two decimals
pub fn format_percentage(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Format a section heading, e.g. `=== CATEGORY BREAKDOWN ===`
pub fn section_header(title: &str) -> String {
    format!("=== {} ===", title.to_uppercase())
}

/// Format a label and value with the value starting at a fixed column
pub fn labelled(label: &str, value: &str, width: usize) -> String {
    format!("{:<width$}{}", format!("{}:", label), value, width = width)
}

/// Format a money amount with a currency symbol, colored when negative
pub fn format_money_signed(amount: Money, symbol: &str, color: bool) -> String {
    let text = amount.format_with_symbol(symbol);
    if color && amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text)
    } else {
        text
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "=".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.2025), "0.20%");
        assert_eq!(format_percentage(112.456), "112.46%");
    }

    #[test]
    fn test_section_header() {
        assert_eq!(section_header("Outstanding amounts"), "=== OUTSTANDING AMOUNTS ===");
    }

    #[test]
    fn test_labelled() {
        assert_eq!(labelled("Total", "KES 5", 10), "Total:    KES 5");
    }

    #[test]
    fn test_format_money_signed() {
        let negative = Money::from_units(-2500);
        assert_eq!(format_money_signed(negative, "KES", false), "KES -2,500");
        assert!(format_money_signed(negative, "KES", true).starts_with("\x1b[31m"));
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Veranda works and concrete", 10), "Veranda...");
        assert_eq!(truncate("Tiles", 10), "Tiles");
    }
}
