//! Line builders: one rendered table line at a time.
//!
//! Two families, selected by [`Config::compact`]: the compact family emits
//! bare `|cell|cell|` lines with minimal separator markers, the beautiful
//! family pads every cell to its resolved column width so the source text
//! lines up visually. Both iterate [`ResolvedLayout::visible`], so column
//! exclusion and sorting compose the same way in either style.

use crate::config::{Align, Config};
use crate::error::Result;
use crate::resolve::ResolvedLayout;
use crate::util::{pad_center, pad_left, pad_right};

/// Builds one rendered line for a header or data row.
pub(crate) fn data_line(
    cells: &[String],
    layout: &ResolvedLayout,
    cfg: &Config,
) -> Result<String> {
    if cfg.compact {
        Ok(compact_data_line(cells, layout))
    } else {
        beautiful_data_line(cells, layout, cfg.align)
    }
}

/// Builds the separator line between the header and the data rows.
pub(crate) fn separator_line(layout: &ResolvedLayout, cfg: &Config) -> String {
    if cfg.compact {
        compact_separator_line(layout.visible_count(), cfg.align)
    } else {
        beautiful_separator_line(layout, cfg.align)
    }
}

fn compact_data_line(cells: &[String], layout: &ResolvedLayout) -> String {
    let mut line = String::from("|");
    for idx in layout.visible() {
        line.push_str(&cells[idx]);
        line.push('|');
    }
    line
}

fn beautiful_data_line(
    cells: &[String],
    layout: &ResolvedLayout,
    align: Align,
) -> Result<String> {
    let mut line = String::from("| ");
    for idx in layout.visible() {
        let padded = match align {
            Align::Left => pad_right(&cells[idx], layout.widths[idx], ' ')?,
            Align::Right => pad_left(&cells[idx], layout.widths[idx], ' ')?,
            Align::Center => pad_center(&cells[idx], layout.widths[idx], ' ')?,
        };
        line.push_str(&padded);
        line.push_str(" | ");
    }
    Ok(line.trim().to_string())
}

fn compact_separator_line(columns: usize, align: Align) -> String {
    let mut line = String::from("|");
    for _ in 0..columns {
        line.push_str(align.marker());
        line.push('|');
    }
    line
}

fn beautiful_separator_line(layout: &ResolvedLayout, align: Align) -> String {
    let mut line = String::from("| ");
    for idx in layout.visible() {
        line.push_str(&rule(layout.widths[idx], align));
        line.push_str(" | ");
    }
    line.trim().to_string()
}

/// Dash rule of the given width with the alignment colons punched into the
/// ends. Resolved widths are at least 2 (3 for center).
fn rule(width: usize, align: Align) -> String {
    match align {
        Align::Left => format!(":{}", "-".repeat(width - 1)),
        Align::Right => format!("{}:", "-".repeat(width - 1)),
        Align::Center => format!(":{}:", "-".repeat(width - 2)),
    }
}
