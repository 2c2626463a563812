//! Path utilities for path expansion and display labels.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Expand tilde (~) in a path to the user's home directory.
///
/// # Examples
/// - `~/projects` -> `/home/user/projects`
/// - `~` -> `/home/user`
/// - `/absolute/path` -> `/absolute/path` (unchanged)
/// - `relative/path` -> `relative/path` (unchanged)
///
/// If the home directory cannot be determined, the path is returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(suffix) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            home.join(suffix.trim_start_matches('/'))
        } else {
            PathBuf::from(path)
        }
    } else {
        PathBuf::from(path)
    }
}

/// The final segment of a path as display text.
///
/// Used for the tree header line and for bracketed placeholder lines.
/// Paths with no final segment (e.g. `/` or `..`) yield an empty string,
/// so the header for the filesystem root stays a single `/`.
pub fn basename(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => Cow::Borrowed(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_with_path() {
        let result = expand_tilde("~/projects/tree");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(result, home.join("projects/tree"));
        }
    }

    #[test]
    fn test_expand_tilde_just_tilde() {
        let result = expand_tilde("~");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(result, home);
        }
    }

    #[test]
    fn test_expand_tilde_absolute_path() {
        let result = expand_tilde("/absolute/path");
        assert_eq!(result, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_expand_tilde_relative_path() {
        let result = expand_tilde("relative/path");
        assert_eq!(result, PathBuf::from("relative/path"));
    }

    #[test]
    fn test_basename_of_file_path() {
        assert_eq!(basename(Path::new("/var/log/syslog")), "syslog");
    }

    #[test]
    fn test_basename_of_relative_path() {
        assert_eq!(basename(Path::new("src/view")), "view");
    }

    #[test]
    fn test_basename_of_root_is_empty() {
        assert_eq!(basename(Path::new("/")), "");
    }

    #[test]
    fn test_basename_of_parent_dir_is_empty() {
        assert_eq!(basename(Path::new("..")), "");
    }
}
