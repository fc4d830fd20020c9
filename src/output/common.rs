//! Common utilities for output formatters

use chrono::DateTime;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render an optional value as a table cell, empty when absent
pub fn cell<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// Render an optional string slice as a table cell
pub fn cell_str(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Render a list as a comma-separated cell
pub fn cell_list(values: &Option<Vec<String>>) -> String {
    values.as_ref().map(|v| v.join(",")).unwrap_or_default()
}

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM:SS`, or as given if unparseable
pub fn format_timestamp(value: Option<&str>) -> String {
    match value {
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Err(_) => raw.to_string(),
        },
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_simple() {
        assert_eq!(escape_csv("simple"), "simple");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("has,comma"), "\"has,comma\"");
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        assert_eq!(escape_csv("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_escape_csv_with_newline() {
        assert_eq!(escape_csv("has\nnewline"), "\"has\nnewline\"");
    }

    #[test]
    fn test_cell_helpers() {
        assert_eq!(cell(&Some(22)), "22");
        assert_eq!(cell::<i32>(&None), "");
        assert_eq!(cell_str(None), "");
        assert_eq!(
            cell_list(&Some(vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()])),
            "10.0.0.1,10.0.0.2"
        );
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(Some("2024-03-01T12:30:45Z")),
            "2024-03-01 12:30:45"
        );
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
        assert_eq!(format_timestamp(None), "");
    }
}
