//! ASCII tree rendering for directory hierarchies.
//!
//! Produces the classic `tree`-style listing:
//!
//! ```text
//! project/
//! ├── src
//! │   ├── lib.rs
//! │   └── main.rs
//! └── Cargo.toml
//! ```
//!
//! Entries are emitted in pre-order with each directory's children sorted
//! by name, so an unchanged tree always renders to identical bytes.

use crate::primitives::path_utils::basename;
use crate::services::fs::{DirLister, FsEntry};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

// Connector glyphs mark an entry's last-sibling status; prefix tokens
// carry ancestor branch state down to deeper levels.
const TEE: &str = "├── ";
const ELBOW: &str = "└── ";
const PIPE_PREFIX: &str = "│   ";
const SPACE_PREFIX: &str = "    ";

/// One directory being walked: its sorted children, a cursor into them,
/// and the indentation prefix for entries at this depth.
struct Frame {
    entries: Vec<FsEntry>,
    cursor: usize,
    prefix: String,
}

/// Renders a directory hierarchy as an ASCII tree.
///
/// Traversal is iterative over an explicit frame stack, so arbitrarily
/// deep hierarchies cannot overflow the call stack.
pub struct TreeRenderer {
    lister: Arc<dyn DirLister>,
}

impl TreeRenderer {
    pub fn new(lister: Arc<dyn DirLister>) -> Self {
        Self { lister }
    }

    /// Render the tree rooted at `root` to `out`.
    ///
    /// The first line is `{basename(root)}/`; the body follows in
    /// pre-order. Unreadable or vanished subtrees collapse to a single
    /// bracketed placeholder line; any other I/O error aborts the walk.
    pub fn render(&self, root: &Path, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}/", basename(root))?;

        let mut stack = Vec::new();
        if let Some(frame) = self.open_dir(root, String::new(), out)? {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            if frame.cursor == frame.entries.len() {
                stack.pop();
                continue;
            }

            let entry = frame.entries[frame.cursor].clone();
            frame.cursor += 1;
            let is_last = frame.cursor == frame.entries.len();

            let connector = if is_last { ELBOW } else { TEE };
            writeln!(out, "{}{}{}", frame.prefix, connector, entry.name)?;

            if entry.is_dir() {
                let extension = if is_last { SPACE_PREFIX } else { PIPE_PREFIX };
                let child_prefix = format!("{}{}", frame.prefix, extension);
                if let Some(child) = self.open_dir(&entry.path, child_prefix, out)? {
                    stack.push(child);
                }
            }
        }

        Ok(())
    }

    /// List a directory and build its traversal frame.
    ///
    /// Permission-denied and not-found failures are recovered locally: a
    /// single placeholder line is written and no frame is produced. The
    /// placeholder is the only line beneath the unreadable directory, so
    /// it takes the closing connector.
    fn open_dir(
        &self,
        path: &Path,
        prefix: String,
        out: &mut impl Write,
    ) -> io::Result<Option<Frame>> {
        let mut entries = match self.lister.list_dir(path) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                writeln!(out, "{}{}[ACCESS DENIED: {}]", prefix, ELBOW, basename(path))?;
                return Ok(None);
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                writeln!(out, "{}{}[NOT FOUND: {}]", prefix, ELBOW, basename(path))?;
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Some(Frame {
            entries,
            cursor: 0,
            prefix,
        }))
    }
}
