//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_against` - tilde expansion + root-relative resolution for config paths
//! - `same_file` - compare two paths after normalization

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative (e.g. output file not written yet)
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a configured path against the project root.
///
/// `~` is expanded first; absolute results are kept, relative ones are
/// joined onto `root`.
pub fn resolve_against(path: &Path, root: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    };
    let full = if expanded.is_relative() {
        root.join(expanded)
    } else {
        expanded
    };
    normalize_path(&full)
}

/// Check whether two paths refer to the same location.
///
/// The output file may not exist yet, so the parent directory is
/// canonicalized and the file name compared verbatim.
pub fn same_file(a: &Path, b: &Path) -> bool {
    fn key(path: &Path) -> PathBuf {
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
                normalize_path(parent).join(name)
            }
            _ => normalize_path(path),
        }
    }
    key(a) == key(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.svg"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_against_relative() {
        let resolved = resolve_against(Path::new("icons"), Path::new("/project"));
        assert_eq!(resolved, PathBuf::from("/project/icons"));
    }

    #[test]
    fn test_resolve_against_absolute() {
        let resolved = resolve_against(Path::new("/abs/icons"), Path::new("/project"));
        assert_eq!(resolved, PathBuf::from("/abs/icons"));
    }

    #[test]
    fn test_same_file_missing_target() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("sprite.svg");
        let b = dir.path().join(".").join("sprite.svg");
        assert!(same_file(&a, &b));
        assert!(!same_file(&a, &dir.path().join("other.svg")));
    }
}
