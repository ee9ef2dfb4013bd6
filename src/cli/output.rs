//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};
use rust_decimal::Decimal;

const RULE_WIDTH: usize = 56;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<16} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("{} {message}", "✓".if_supports_color(Stream::Stdout, |t| t.green()));
}

/// Print a warning status line.
pub fn warn(message: &str) {
    println!("{} {message}", "⚠".if_supports_color(Stream::Stdout, |t| t.yellow()));
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("{message}");
}

/// Format a dollar amount, keeping the sign in front.
pub fn money(value: Decimal) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        format!("-${}", value.abs())
    } else {
        format!("${value}")
    }
}

/// Format a price in whole cents, truncated.
pub fn cents(value: Decimal) -> String {
    format!("{}¢", (value * Decimal::ONE_HUNDRED).trunc())
}

/// Format an allocation as `[a, b, c]`.
pub fn shares_list(allocation: &[u32]) -> String {
    let parts: Vec<String> = allocation.iter().map(u32::to_string).collect();
    format!("[{}]", parts.join(", "))
}
