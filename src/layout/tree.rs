//! Recursive tree rendering.

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::Path;

use termcolor::WriteColor;

use super::RenderConfig;
use crate::category::Category;
use crate::entry::{self, Entry, FileKind};
use crate::sort;
use crate::theme::Stylist;

/// Per-render bookkeeping: the set of depths whose directory still has
/// siblings pending below it, i.e. depths that draw a continuation bar.
///
/// Owned by exactly one render and threaded `&mut` through the recursion;
/// it is never shared across renders.
#[derive(Debug, Default)]
struct TreeState {
    continuing: HashSet<usize>,
}

impl TreeState {
    fn mark(&mut self, depth: usize) {
        self.continuing.insert(depth);
    }

    fn clear(&mut self, depth: usize) {
        self.continuing.remove(&depth);
    }

    fn is_continuing(&self, depth: usize) -> bool {
        self.continuing.contains(&depth)
    }
}

/// Render `root` as a connector-prefixed tree.
///
/// The root itself is printed first, colored as a directory. Failure to
/// read the root is returned to the caller; failures below the root are
/// reported to stderr and prune only that subtree.
pub fn render_tree(
    w: &mut dyn WriteColor,
    stylist: &dyn Stylist,
    root: &Path,
    config: &RenderConfig,
) -> io::Result<()> {
    let entries = entry::read_dir_entries(root, config.show_hidden)?;

    if config.color {
        w.set_color(&stylist.entry_spec(Category::Dir))?;
    }
    write!(w, "{}", root.display())?;
    if config.color {
        w.reset()?;
    }
    writeln!(w)?;

    let mut state = TreeState::default();
    walk(w, stylist, root, entries, &mut state, config)
}

fn walk(
    w: &mut dyn WriteColor,
    stylist: &dyn Stylist,
    root: &Path,
    mut entries: Vec<Entry>,
    state: &mut TreeState,
    config: &RenderConfig,
) -> io::Result<()> {
    if entries.is_empty() {
        return Ok(());
    }
    sort::sort_entries(&mut entries, config.sort, config.reverse);

    // Depth comes from the entry paths themselves, so the prefix
    // bookkeeping cannot drift out of sync with the recursion.
    let depth = depth_below_root(entries[0].path(), root);

    let last = entries.len() - 1;
    for (i, entry) in entries.iter().enumerate() {
        let is_last = i == last;

        if entry.is_dir() {
            if is_last {
                state.clear(depth);
            } else {
                state.mark(depth);
            }
        }

        let mut prefix = String::new();
        for ancestor in 0..depth {
            prefix.push_str(if state.is_continuing(ancestor) {
                "\u{2502}  "
            } else {
                "   "
            });
        }
        prefix.push_str(if is_last {
            "\u{2514}\u{2500}\u{2500}"
        } else {
            "\u{251c}\u{2500}\u{2500}"
        });

        write!(w, "{prefix}")?;
        stylist.write_entry(w, entry, config)?;
        writeln!(w)?;

        // Only real directories are entered; descending through symlinks
        // could loop forever on a link cycle.
        if entry.kind() == FileKind::Dir {
            match entry::read_dir_entries(entry.path(), config.show_hidden) {
                Ok(children) => walk(w, stylist, root, children, state, config)?,
                Err(err) => eprintln!("lsr: {}: {err}", entry.path().display()),
            }
        }
    }
    Ok(())
}

fn depth_below_root(path: &Path, root: &Path) -> usize {
    path.strip_prefix(root)
        .map(|rel| rel.components().count())
        .unwrap_or(1)
        .saturating_sub(1)
}
