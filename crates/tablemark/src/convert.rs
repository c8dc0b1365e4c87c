//! Table assembly: the [`convert`] entry point.

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::line;
use crate::resolve::ResolvedLayout;

/// Converts a record matrix into the text of a Markdown table.
///
/// Row 0 is the header; every row must have the same number of cells as the
/// header. Pipe characters in cells are escaped as `\|` in the output, into
/// a fresh copy; the caller's data is never mutated. Lines are joined with
/// a single `\n` and the final line carries no trailing line break.
///
/// Excluding every column yields `Ok(String::new())`, not an error.
///
/// # Example
///
/// ```rust
/// use tablemark::{convert, Align, Config};
///
/// let records = vec![
///     vec!["Name", "Role"],
///     vec!["Ada", "Engineer"],
/// ];
///
/// let table = convert(&records, &Config::new().align(Align::Left)).unwrap();
/// assert_eq!(table, "\
/// | Name | Role     |
/// | :--- | :------- |
/// | Ada  | Engineer |");
/// ```
///
/// # Errors
///
/// Fails on an inconsistent configuration ([`Config::validate`]), an empty
/// matrix, or ragged rows. Non-fatal configuration warnings go to the
/// diagnostic log, never the error return; on any error no partial output
/// is produced.
pub fn convert<S: AsRef<str>>(records: &[Vec<S>], cfg: &Config) -> Result<String> {
    for warning in cfg.validate()? {
        warn!("{}", warning);
    }

    let header = records.first().ok_or(TableError::EmptyInput)?;
    let columns = header.len();
    for (idx, row) in records.iter().enumerate().skip(1) {
        if row.len() != columns {
            return Err(TableError::RaggedRow {
                row: idx,
                len: row.len(),
                expected: columns,
            });
        }
    }

    if cfg.verbose {
        debug!(rows = records.len(), columns, "converting records");
    }

    // Escape into a fresh copy; the caller's cells stay untouched.
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_ref().replace('|', "\\|"))
                .collect()
        })
        .collect();

    let layout = ResolvedLayout::resolve(&rows, cfg)?;
    if layout.all_excluded() {
        warn!("all columns were excluded; returning an empty table");
        return Ok(String::new());
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    if let Some(caption) = cfg.caption.as_deref() {
        lines.push(format!("<!-- {} -->", caption));
    }
    for (idx, row) in rows.iter().enumerate() {
        lines.push(line::data_line(row, &layout, cfg)?);
        if idx == 0 {
            lines.push(line::separator_line(&layout, cfg));
        }
    }

    if cfg.verbose {
        debug!(lines = lines.len(), "table assembled");
    }

    Ok(lines.join("\n"))
}
