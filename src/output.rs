//! CLI output formatting.
//!
//! Each display has a `format_*` function (returns lines) for testability
//! and a `print_*` wrapper that writes to stdout/stderr. Format functions
//! are pure — no I/O, no side effects.

use crate::outcome::Response;
use serde_json::Value;

/// Success payload as pretty JSON, one trailing newline handled by caller.
pub fn format_success(data: Option<&Value>) -> String {
    match data {
        Some(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string()),
        None => "null".to_string(),
    }
}

/// Error list, one message per line.
pub fn format_errors(errors: &[String]) -> Vec<String> {
    let mut lines = vec![format!(
        "{} error{}:",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    )];
    lines.extend(errors.iter().map(|e| format!("  - {e}")));
    lines
}

/// Status and content-type header lines for a short-circuit response.
pub fn format_response_headers(response: &Response) -> Vec<String> {
    vec![
        format!("Status: {}", response.status),
        format!("Content-Type: {}", response.content_type),
    ]
}

pub fn print_errors(errors: &[String]) {
    for line in format_errors(errors) {
        eprintln!("{line}");
    }
}

pub fn print_response_headers(response: &Response) {
    for line in format_response_headers(response) {
        println!("{line}");
    }
}
