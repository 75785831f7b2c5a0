//! Entry model - a frozen snapshot of one filesystem item.
//!
//! An [`Entry`] captures the metadata of a file, directory or symlink at the
//! moment it is read. Later filesystem changes are not reflected; the layout
//! engines treat the snapshot as immutable input.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// What kind of filesystem item an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
    /// A symlink whose target resolves. `to_dir` is set when it points at a
    /// directory; such links are displayed like directories but never
    /// descended into.
    Symlink { to_dir: bool },
    /// A symlink whose target cannot be resolved.
    BrokenSymlink,
}

/// One filesystem item plus the metadata snapshot taken when it was read.
///
/// The path is set at construction and never changes. Two entries compare
/// equal exactly when their paths are equal; metadata is never part of
/// equality.
#[derive(Debug, Clone)]
pub struct Entry {
    path: PathBuf,
    name: String,
    kind: FileKind,
    size: u64,
    modified: SystemTime,
    mode: u32,
    nlink: u64,
    uid: u32,
    gid: u32,
    link_target: Option<PathBuf>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Entry {}

impl Entry {
    /// Build an entry from a path, resolving metadata once.
    ///
    /// Symlinks are not followed for the snapshot itself (`symlink_metadata`),
    /// but the target is probed to distinguish live links, directory links
    /// and broken links.
    pub fn from_path(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let meta = fs::symlink_metadata(&path)?;
        let file_type = meta.file_type();

        let (kind, link_target) = if file_type.is_symlink() {
            let target = fs::read_link(&path).ok();
            match fs::metadata(&path) {
                Ok(resolved) => (
                    FileKind::Symlink {
                        to_dir: resolved.is_dir(),
                    },
                    target,
                ),
                Err(_) => (FileKind::BrokenSymlink, target),
            }
        } else if file_type.is_dir() {
            (FileKind::Dir, None)
        } else {
            (FileKind::File, None)
        };

        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        };

        Ok(Self {
            name,
            kind,
            size: meta.len(),
            modified: meta.modified().unwrap_or(UNIX_EPOCH),
            mode: mode_bits(&meta),
            nlink: link_count(&meta),
            uid: owner_id(&meta),
            gid: group_id(&meta),
            link_target,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the entry (the path itself when it has no base name,
    /// e.g. `/` or `.`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    pub fn nlink(&self) -> u64 {
        self.nlink
    }

    pub fn link_target(&self) -> Option<&Path> {
        self.link_target.as_deref()
    }

    /// True for directories and for symlinks that point at directories.
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, FileKind::Dir | FileKind::Symlink { to_dir: true })
    }

    pub fn is_link(&self) -> bool {
        matches!(
            self.kind,
            FileKind::Symlink { .. } | FileKind::BrokenSymlink
        )
    }

    pub fn is_broken(&self) -> bool {
        self.kind == FileKind::BrokenSymlink
    }

    /// Hidden by naming convention: a leading dot, excluding the `.` and
    /// `..` pseudo-entries.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.') && self.name != "." && self.name != ".."
    }

    #[cfg(unix)]
    pub fn is_executable(&self) -> bool {
        self.kind == FileKind::File && self.mode & 0o111 != 0
    }

    #[cfg(not(unix))]
    pub fn is_executable(&self) -> bool {
        self.kind == FileKind::File
            && matches!(
                self.path.extension().and_then(|e| e.to_str()),
                Some("exe") | Some("bat") | Some("cmd") | Some("ps1")
            )
    }

    /// Permission string in the `Lrwxrwxrwx` style: a kind character
    /// followed by the user, group and other triples.
    pub fn mode_string(&self) -> String {
        let kind_char = match self.kind {
            FileKind::Dir => 'd',
            FileKind::Symlink { .. } | FileKind::BrokenSymlink => 'L',
            FileKind::File => '-',
        };
        let mut out = String::with_capacity(10);
        out.push(kind_char);
        for shift in [6u32, 3, 0] {
            let bits = self.mode >> shift;
            out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
            out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
            out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
        }
        out
    }

    /// Owner name resolved from the snapshot's uid, falling back to the
    /// numeric id. Empty on platforms without owners.
    #[cfg(unix)]
    pub fn owner(&self) -> String {
        uzers::get_user_by_uid(self.uid)
            .map(|u| u.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| self.uid.to_string())
    }

    #[cfg(not(unix))]
    pub fn owner(&self) -> String {
        String::new()
    }

    /// Group name resolved from the snapshot's gid, falling back to the
    /// numeric id. Empty on platforms without groups.
    #[cfg(unix)]
    pub fn group(&self) -> String {
        uzers::get_group_by_gid(self.gid)
            .map(|g| g.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| self.gid.to_string())
    }

    #[cfg(not(unix))]
    pub fn group(&self) -> String {
        String::new()
    }

    #[cfg(test)]
    pub(crate) fn synthetic(name: &str, kind: FileKind, size: u64) -> Self {
        Self {
            path: PathBuf::from(name),
            name: name.to_string(),
            kind,
            size,
            modified: UNIX_EPOCH,
            mode: 0o644,
            nlink: 1,
            uid: 0,
            gid: 0,
            link_target: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = modified;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_link_target(mut self, target: &str) -> Self {
        self.link_target = Some(PathBuf::from(target));
        self
    }
}

/// Read the children of `path`, dropping hidden entries unless requested.
///
/// Children that vanish or become unreadable between enumeration and the
/// metadata snapshot are skipped; only the directory read itself can fail.
pub fn read_dir_entries(path: &Path, show_hidden: bool) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for dirent in fs::read_dir(path)? {
        let Ok(dirent) = dirent else { continue };
        let Ok(entry) = Entry::from_path(dirent.path()) else {
            continue;
        };
        if show_hidden || !entry.is_hidden() {
            entries.push(entry);
        }
    }
    Ok(entries)
}

#[cfg(unix)]
fn mode_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    meta.mode()
}

#[cfg(not(unix))]
fn mode_bits(meta: &fs::Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}

#[cfg(unix)]
fn link_count(meta: &fs::Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    meta.nlink()
}

#[cfg(not(unix))]
fn link_count(_meta: &fs::Metadata) -> u64 {
    1
}

#[cfg(unix)]
fn owner_id(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    meta.uid()
}

#[cfg(not(unix))]
fn owner_id(_meta: &fs::Metadata) -> u32 {
    0
}

#[cfg(unix)]
fn group_id(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    meta.gid()
}

#[cfg(not(unix))]
fn group_id(_meta: &fs::Metadata) -> u32 {
    0
}
