//! CSV output formatter

use super::common::escape_csv;
use super::TableRow;

/// Render rows as CSV with the selected columns
pub fn render_csv<T: TableRow>(items: &[T], columns: &[&str], no_headers: bool) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    if !no_headers {
        lines.push(columns.join(","));
    }
    for item in items {
        lines.push(
            columns
                .iter()
                .map(|c| escape_csv(&item.cell(c)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}
