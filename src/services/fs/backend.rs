use std::io;
use std::path::{Path, PathBuf};

/// Represents a file or directory entry
#[derive(Debug, Clone)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: FsEntryKind,
}

impl FsEntry {
    pub fn new(path: PathBuf, name: String, kind: FsEntryKind) -> Self {
        Self { path, name, kind }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FsEntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == FsEntryKind::File
    }
}

/// Classification of a filesystem entry.
///
/// `Unknown` means the type probe itself failed (e.g. permission denied
/// on stat, or a broken symlink). Such entries are never descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FsEntryKind {
    File,
    Directory,
    Unknown,
}

/// Directory listing backend trait
///
/// The contract mirrors the filesystem's "list directory entries"
/// primitive: given a path, either return the immediate children (in no
/// guaranteed order) or fail.
pub trait DirLister: Send + Sync {
    /// List entries in a directory (non-recursive)
    ///
    /// Entry names are basenames only; entry paths are full paths suitable
    /// for further listing. No ordering is guaranteed.
    ///
    /// # Errors
    ///
    /// `PermissionDenied` and `NotFound` are the recoverable failure
    /// modes; callers treat anything else as fatal.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<FsEntry>>;
}
