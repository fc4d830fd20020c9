//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML.
//! Each resource describes its columns through [`TableRow`]; structured
//! formats print the API objects unchanged.

mod columns;
mod common;
mod csv;
mod json;
mod table;

mod firewall_rules;
mod flow_logs;
mod groups;
mod loadbalancers;
mod nics;
mod requests;
mod resources;
mod s3keys;
mod shares;
mod users;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

pub use self::columns::select_columns;
pub use self::common::{escape_csv, format_timestamp};
pub use self::csv::render_csv;
pub use self::json::{render_json, render_yaml};
pub use self::table::render_table;

/// Rendering options taken from the global flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Columns requested with `--cols`
    pub cols: Option<Vec<String>>,
    pub no_headers: bool,
    /// Suppress success messages (data is always printed)
    pub quiet: bool,
}

/// A resource that can be printed as a table row
pub trait TableRow: Serialize {
    /// Every column the resource knows, in display order
    const ALL_COLUMNS: &'static [&'static str];
    /// Columns printed when `--cols` is not given
    const DEFAULT_COLUMNS: &'static [&'static str];

    /// Cell text for one of `ALL_COLUMNS`
    fn cell(&self, column: &str) -> String;
}

/// Render a list of items in the requested format
pub fn render_items<T: TableRow>(items: &[T], options: &OutputOptions) -> Result<String> {
    let columns = select_columns(options.cols.as_deref(), T::ALL_COLUMNS, T::DEFAULT_COLUMNS)?;
    match options.format {
        OutputFormat::Table => Ok(render_table(items, &columns, options.no_headers)),
        OutputFormat::Csv => Ok(render_csv(items, &columns, options.no_headers)),
        OutputFormat::Json => render_json(items),
        OutputFormat::Yaml => render_yaml(items),
    }
}

/// Render a single item; structured formats print the object, not a list
pub fn render_item<T: TableRow>(item: &T, options: &OutputOptions) -> Result<String> {
    select_columns(options.cols.as_deref(), T::ALL_COLUMNS, T::DEFAULT_COLUMNS)?;
    match options.format {
        OutputFormat::Json => render_json(item),
        OutputFormat::Yaml => render_yaml(item),
        _ => render_items(std::slice::from_ref(item), options),
    }
}

/// Print a list of items to stdout
pub fn print_items<T: TableRow>(items: &[T], options: &OutputOptions) -> Result<()> {
    println!("{}", render_items(items, options)?);
    Ok(())
}

/// Print a single item to stdout
pub fn print_item<T: TableRow>(item: &T, options: &OutputOptions) -> Result<()> {
    println!("{}", render_item(item, options)?);
    Ok(())
}

/// Print a success message to stderr unless quiet
pub fn print_status(options: &OutputOptions, message: &str) {
    if !options.quiet {
        eprintln!("{}", message);
    }
}
