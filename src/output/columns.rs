//! Column selection for table and CSV output

use crate::error::{IonosError, Result};

/// Keyword selecting every known column
const ALL_KEYWORD: &str = "all";

/// Resolve the columns to print
///
/// Without `--cols` the resource's default columns are used. Names match
/// case-insensitively and are returned in their canonical spelling, in the
/// order the user gave them.
pub fn select_columns(
    requested: Option<&[String]>,
    all: &[&'static str],
    defaults: &[&'static str],
) -> Result<Vec<&'static str>> {
    let requested = match requested {
        Some(r) if !r.is_empty() => r,
        _ => return Ok(defaults.to_vec()),
    };

    if requested
        .iter()
        .any(|c| c.trim().eq_ignore_ascii_case(ALL_KEYWORD))
    {
        return Ok(all.to_vec());
    }

    requested
        .iter()
        .map(|column| {
            let wanted = column.trim();
            all.iter()
                .copied()
                .find(|known| known.eq_ignore_ascii_case(wanted))
                .ok_or_else(|| IonosError::UnknownColumn {
                    column: wanted.to_string(),
                    available: all.iter().map(|c| c.to_string()).collect(),
                })
        })
        .collect()
}
