//! Column grid layout.
//!
//! Entries fill the grid column-major: index `i` lands at
//! `row = i % rows`, `col = (i - row) / rows` with `rows = ceil(n / c)`.
//! The column search maximizes the column count that still fits the
//! terminal width, measured in Unicode display columns.

use std::io::{self, Write};

use termcolor::WriteColor;
use unicode_width::UnicodeWidthStr;

use super::RenderConfig;
use crate::entry::Entry;
use crate::theme::Stylist;

/// A column assignment that fits the width budget.
#[derive(Debug, PartialEq, Eq)]
struct GridPlan {
    columns: usize,
    rows: usize,
    col_widths: Vec<usize>,
}

/// Column-major cell coordinates for a linear index.
fn row_col(i: usize, rows: usize) -> (usize, usize) {
    let row = i % rows;
    (row, (i - row) / rows)
}

/// Try a fixed column count. Returns the per-column widths when the total
/// rendered width stays under the budget, `None` otherwise. Separators are
/// counted from the candidate column count even when trailing columns end
/// up empty.
fn plan_columns(widths: &[usize], columns: usize, config: &RenderConfig) -> Option<GridPlan> {
    let rows = widths.len().div_ceil(columns);

    let mut col_widths = vec![0usize; columns];
    for (i, width) in widths.iter().enumerate() {
        let (_, col) = row_col(i, rows);
        if *width > col_widths[col] {
            col_widths[col] = *width;
        }
    }

    let total = col_widths.iter().sum::<usize>() + (columns - 1) * config.col_sep;
    if total >= config.term_width {
        return None;
    }

    Some(GridPlan {
        columns,
        rows,
        col_widths,
    })
}

/// Exponential-then-linear search for the densest fitting column count.
///
/// Starts at two columns and doubles while candidates fit, then backs off
/// one column at a time after the first failure (or once the count exceeds
/// the entry count). A forced count starts directly in the back-off phase,
/// so it is accepted as-is when it fits and shrunk until it does otherwise.
/// `None` means nothing above one column fits.
fn search_columns(widths: &[usize], config: &RenderConfig) -> Option<GridPlan> {
    let mut columns = 2;
    let mut going_backwards = false;
    if config.columns > 0 {
        columns = config.columns;
        going_backwards = true;
    }

    let mut plan = None;
    while columns > 1 {
        plan = plan_columns(widths, columns, config);
        if going_backwards && plan.is_some() {
            break;
        }

        if plan.is_none() || columns > widths.len() {
            going_backwards = true;
        }

        if going_backwards {
            columns -= 1;
        } else {
            columns *= 2;
        }
    }

    if columns > 1 { plan } else { None }
}

/// Render entries as a column grid.
///
/// Falls back to one entry per line when no multi-column layout fits; that
/// is the guaranteed-fit degenerate grid, not an error. Zero entries
/// produce no output and no search.
pub fn render_grid(
    w: &mut dyn WriteColor,
    stylist: &dyn Stylist,
    entries: &[Entry],
    config: &RenderConfig,
) -> io::Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let pretty: Vec<String> = entries
        .iter()
        .map(|e| stylist.pretty_name(e, config))
        .collect();
    let widths: Vec<usize> = pretty.iter().map(|p| p.width()).collect();

    let Some(plan) = search_columns(&widths, config) else {
        for entry in entries {
            stylist.write_entry(w, entry, config)?;
            writeln!(w)?;
        }
        return Ok(());
    };

    let sep = " ".repeat(config.col_sep);
    for row in 0..plan.rows {
        for col in 0..plan.columns {
            let i = col * plan.rows + row;
            if i >= entries.len() {
                break;
            }
            if col > 0 {
                write!(w, "{sep}")?;
            }
            stylist.write_entry(w, &entries[i], config)?;
            let padding = plan.col_widths[col] - widths[i];
            write!(w, "{:pad$}", "", pad = padding)?;
        }
        writeln!(w)?;
    }
    Ok(())
}
