//! Nerd Font glyphs used to decorate entry names.

use crate::category::Category;

/// Arrow between a symlink name and its target.
pub const LINK_ARROW: &str = " \u{279c} ";

/// Glyph for one display category.
pub fn icon_for(category: Category) -> &'static str {
    match category {
        Category::Dir => "\u{f07b}",
        Category::Symlink => "\u{f0c1}",
        Category::Broken => "\u{f127}",
        Category::Archive => "\u{f1c6}",
        Category::Executable => "\u{f489}",
        Category::Code => "\u{f121}",
        Category::Image => "\u{f03e}",
        Category::Audio => "\u{f001}",
        Category::Video => "\u{f008}",
        Category::File => "\u{f15b}",
    }
}
