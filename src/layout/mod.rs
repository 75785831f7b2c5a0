//! Listing layout engines.
//!
//! Turns entry collections into positioned text lines:
//!
//! - `grid` - column grid with a density-maximizing column search
//! - `list` - long format with aligned fields and a totals line
//! - `tree` - recursive connector-prefixed tree
//! - `glob_groups` - wildcard expansion grouped by parent directory

mod glob_groups;
mod grid;
mod list;
mod tree;

pub use glob_groups::render_glob_groups;
pub use grid::render_grid;
pub use list::{humanize_size, render_list};
pub use tree::render_tree;

use std::io;

use termcolor::WriteColor;

use crate::entry::Entry;
use crate::sort::{self, SortKey};
use crate::theme::Stylist;

/// Read-only configuration consumed by every layout engine.
///
/// Built once per invocation and never mutated during rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub show_hidden: bool,
    pub sort: SortKey,
    pub reverse: bool,
    /// Forced grid column count; 0 searches for the densest fit.
    pub columns: usize,
    /// Spaces between grid columns.
    pub col_sep: usize,
    /// Long listing: size, time and name per line.
    pub long: bool,
    /// Extended long listing: adds mode, link count, owner and group.
    pub extended: bool,
    /// Exact byte sizes instead of humanized values.
    pub bytes: bool,
    pub color: bool,
    pub icons: bool,
    /// Width budget for the grid, already resolved to a concrete value.
    pub term_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            sort: SortKey::Name,
            reverse: false,
            columns: 0,
            col_sep: 2,
            long: false,
            extended: false,
            bytes: false,
            color: true,
            icons: true,
            term_width: 80,
        }
    }
}

/// Sort and render a flat listing, as a grid or a long list per the config.
pub fn render_entries(
    w: &mut dyn WriteColor,
    stylist: &dyn Stylist,
    mut entries: Vec<Entry>,
    config: &RenderConfig,
) -> io::Result<()> {
    sort::sort_entries(&mut entries, config.sort, config.reverse);
    if config.long {
        list::render_list(w, stylist, &entries, config)
    } else {
        grid::render_grid(w, stylist, &entries, config)
    }
}
