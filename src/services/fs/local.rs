use super::backend::{DirLister, FsEntry, FsEntryKind};
use std::fs;
use std::io;
use std::path::Path;

/// Directory lister backed by the local filesystem
#[derive(Debug, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

/// Probe an entry's type with a symlink-following stat.
///
/// A failing probe yields `Unknown` rather than an error: the entry still
/// renders, it just won't be descended into.
fn classify(path: &Path) -> FsEntryKind {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => FsEntryKind::Directory,
        Ok(_) => FsEntryKind::File,
        Err(err) => {
            tracing::warn!("Could not determine type of {}: {}", path.display(), err);
            FsEntryKind::Unknown
        }
    }
}

impl DirLister for LocalFs {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(path)? {
            let dir_entry = dir_entry?;
            let child_path = dir_entry.path();
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            let kind = classify(&child_path);
            entries.push(FsEntry::new(child_path, name, kind));
        }
        Ok(entries)
    }
}
