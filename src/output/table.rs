//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::TableRow;

/// Render rows as a borderless table
pub fn render_table<T: TableRow>(items: &[T], columns: &[&str], no_headers: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_headers {
        table.set_header(columns.to_vec());
    }

    for item in items {
        table.add_row(columns.iter().map(|c| item.cell(c)).collect::<Vec<_>>());
    }

    table.to_string()
}
