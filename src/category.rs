//! Display categories for entries.
//!
//! A category drives color and icon selection only; it never feeds back into
//! layout decisions.

use crate::entry::{Entry, FileKind};

/// Classification of an entry for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    File,
    Dir,
    Symlink,
    Broken,
    Archive,
    Executable,
    Code,
    Image,
    Audio,
    Video,
}

/// Map an entry to its display category.
///
/// Kind wins over extension: directories, symlinks and broken links keep
/// their kind category no matter how they are named. Plain files are
/// classified by extension, then by the executable bit.
pub fn classify(entry: &Entry) -> Category {
    match entry.kind() {
        FileKind::Dir => Category::Dir,
        FileKind::Symlink { .. } => Category::Symlink,
        FileKind::BrokenSymlink => Category::Broken,
        FileKind::File => {
            if let Some(category) = classify_extension(entry.name()) {
                return category;
            }
            if entry.is_executable() {
                return Category::Executable;
            }
            Category::File
        }
    }
}

fn classify_extension(name: &str) -> Option<Category> {
    let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
    let category = match ext.as_str() {
        "7z" | "bz2" | "gz" | "rar" | "tar" | "tgz" | "xz" | "zip" | "zst" => Category::Archive,
        "c" | "cpp" | "cs" | "go" | "h" | "hpp" | "java" | "js" | "kt" | "lua" | "php" | "pl"
        | "py" | "rb" | "rs" | "sh" | "swift" | "ts" => Category::Code,
        "bmp" | "gif" | "ico" | "jpeg" | "jpg" | "png" | "svg" | "tiff" | "webp" => {
            Category::Image
        }
        "aac" | "flac" | "m4a" | "mp3" | "ogg" | "opus" | "wav" => Category::Audio,
        "avi" | "mkv" | "mov" | "mp4" | "mpeg" | "webm" | "wmv" => Category::Video,
        _ => return None,
    };
    Some(category)
}
