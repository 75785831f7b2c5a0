//! lsr - A colorful ls replacement with grid, long and tree views

pub mod category;
pub mod entry;
pub mod hidden;
pub mod icons;
pub mod layout;
pub mod sort;
pub mod theme;

pub use category::Category;
pub use entry::{Entry, FileKind, read_dir_entries};
pub use hidden::is_path_hidden;
pub use layout::{RenderConfig, render_entries, render_glob_groups, render_tree};
pub use sort::{SortKey, sort_entries};
pub use theme::{Stylist, Theme};
