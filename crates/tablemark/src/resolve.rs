//! Per-call layout resolution: excluded positions, rendering order, widths.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::config::{Align, Config, SortMode};
use crate::error::{Result, TableError};
use crate::util::codepoint_width;

/// Call-scoped rendering state derived from the configuration and the
/// (already pipe-escaped) record matrix.
///
/// Built once at the top of [`convert`](crate::convert) and threaded
/// explicitly through the line builders; it is never stored on the
/// configuration, so reusing a [`Config`] across calls cannot leak stale
/// indices.
#[derive(Clone, Debug)]
pub struct ResolvedLayout {
    /// Original-order column positions skipped during rendering.
    pub excluded: BTreeSet<usize>,
    /// Left-to-right rendering order over all original positions.
    pub order: Vec<usize>,
    /// Width per original column position, floored so the separator line
    /// always has room for its alignment colons. Only the beautiful line
    /// family reads these.
    pub widths: Vec<usize>,
}

impl ResolvedLayout {
    /// Builds the layout for one conversion.
    ///
    /// `rows` must already carry escaped cell text: widths are measured on
    /// what will actually be printed.
    pub fn resolve(rows: &[Vec<String>], cfg: &Config) -> Result<Self> {
        let header = rows.first().ok_or(TableError::EmptyInput)?;
        let excluded = excluded_indices(&cfg.excluded_columns, header);
        let order = column_order(cfg, header)?;
        let widths = column_widths(rows, cfg.align);

        Ok(ResolvedLayout {
            excluded,
            order,
            widths,
        })
    }

    /// Iterates column positions in rendering order, skipping excluded
    /// ones. Both line families traverse columns through this.
    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        self.order
            .iter()
            .copied()
            .filter(move |idx| !self.excluded.contains(idx))
    }

    /// Number of columns that will actually be rendered.
    pub fn visible_count(&self) -> usize {
        self.order.len() - self.excluded.len()
    }

    /// True when every column was excluded (and at least one exists).
    pub fn all_excluded(&self) -> bool {
        !self.excluded.is_empty() && self.excluded.len() == self.order.len()
    }
}

/// Positions in `header` whose name appears in `excluded`.
///
/// Matching is exact string equality; excluded names absent from the header
/// are silently ignored.
fn excluded_indices(excluded: &[String], header: &[String]) -> BTreeSet<usize> {
    header
        .iter()
        .enumerate()
        .filter(|(_, name)| excluded.iter().any(|candidate| candidate == *name))
        .map(|(idx, _)| idx)
        .collect()
}

/// Left-to-right rendering order for all columns.
///
/// Sorting operates on `(position, name)` pairs with a stable sort:
/// duplicate header names keep one entry per column, and ties stay in
/// original order.
fn column_order(cfg: &Config, header: &[String]) -> Result<Vec<usize>> {
    let mut pairs: Vec<(usize, &str)> = header
        .iter()
        .map(String::as_str)
        .enumerate()
        .collect();

    match cfg.sort {
        SortMode::None => {}
        SortMode::Ascending => pairs.sort_by(|&(_, a), &(_, b)| compare_ci(a, b)),
        SortMode::Descending => pairs.sort_by(|&(_, a), &(_, b)| compare_ci(b, a)),
        SortMode::Custom => {
            let compare = cfg
                .sort_fn
                .as_ref()
                .ok_or(TableError::MissingSortFunction)?;
            pairs.sort_by(|&(_, a), &(_, b)| compare(a, b));
        }
    }

    Ok(pairs.into_iter().map(|(idx, _)| idx).collect())
}

/// Case-insensitive ordinal comparison; no locale collation.
fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Maximum codepoint width per original column over all rows, header
/// included, then floored per alignment: center needs 3 columns for `:-:`,
/// the others need 2 for `:-` / `-:`.
fn column_widths(rows: &[Vec<String>], align: Align) -> Vec<usize> {
    let columns = rows.first().map_or(0, Vec::len);
    let mut widths = vec![0; columns];

    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if idx < widths.len() {
                widths[idx] = widths[idx].max(codepoint_width(cell));
            }
        }
    }

    for width in &mut widths {
        if align == Align::Center {
            if *width <= 2 {
                *width = 3;
            }
        } else if *width < 2 {
            *width = 2;
        }
    }

    widths
}
