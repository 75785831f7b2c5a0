//! Entry ordering.

use std::cmp::Ordering;

use crate::entry::Entry;

/// Key a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Time,
    Extension,
}

impl SortKey {
    /// Lenient parse: unknown keys fall back to name ordering. Sort order
    /// is a presentation concern, so a typo must never fail the run.
    pub fn parse(key: &str) -> Self {
        match key.to_ascii_lowercase().as_str() {
            "size" => Self::Size,
            "time" => Self::Time,
            "extension" | "ext" => Self::Extension,
            _ => Self::Name,
        }
    }
}

/// Sort entries in place.
///
/// The sort is stable. `reverse` inverts the comparator, not the input
/// order, so equal-key runs keep the same relative order in both
/// directions.
pub fn sort_entries(entries: &mut [Entry], key: SortKey, reverse: bool) {
    entries.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        if reverse { ordering.reverse() } else { ordering }
    });
}

fn compare(a: &Entry, b: &Entry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => name_order(a.name(), b.name()),
        SortKey::Size => a.size().cmp(&b.size()),
        SortKey::Time => a.modified().cmp(&b.modified()),
        SortKey::Extension => extension_of(a.name()).cmp(&extension_of(b.name())),
    }
}

/// Case-insensitive name ordering with an exact-bytes tiebreak, keeping the
/// total order deterministic for names that fold to the same string.
fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn extension_of(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}
