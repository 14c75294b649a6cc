//! Input directory scanning (read-only).

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use super::SpriteError;
use crate::log;
use crate::utils::path::same_file;

/// Check whether a file name carries the `.svg` suffix, ignoring case.
pub fn is_svg_name(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.len() > 4
        && name
            .get(name.len() - 4..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".svg"))
}

/// Strip the `.svg` suffix from a file name, keeping its case.
///
/// `Home.SVG` -> `Home`, `arrow.left.svg` -> `arrow.left`
pub fn base_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if is_svg_name(OsStr::new(&name)) {
        name[..name.len() - 4].to_string()
    } else {
        name
    }
}

/// Collect every `.svg` file under `dir`.
///
/// Entries are sorted by name inside each directory so two runs over the
/// same tree see the same sequence. `exclude` (the sprite being written) is
/// never returned, even when it lives inside `dir`.
///
/// # Errors
///
/// - [`SpriteError::DirectoryNotFound`] if `dir` is missing or unreadable
/// - [`SpriteError::NoInputFiles`] if nothing matched
pub fn scan_svg_files(
    dir: &Path,
    recursive: bool,
    exclude: Option<&Path>,
) -> Result<Vec<PathBuf>, SpriteError> {
    if !dir.is_dir() || fs::read_dir(dir).is_err() {
        return Err(SpriteError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let (files, unreadable) = walk_svg_files(dir, recursive, exclude);
    for problem in &unreadable {
        log!("warning"; "skipped unreadable entry: {}", problem);
    }

    if files.is_empty() {
        return Err(SpriteError::NoInputFiles {
            path: dir.to_path_buf(),
        });
    }

    Ok(files)
}

/// Walk `dir`, returning matched files plus the entries that could not be
/// read (a locked subdirectory drops its whole subtree).
fn walk_svg_files(
    dir: &Path,
    recursive: bool,
    exclude: Option<&Path>,
) -> (Vec<PathBuf>, Vec<String>) {
    let depth = if recursive { usize::MAX } else { 1 };
    let mut unreadable = Vec::new();

    let files: Vec<PathBuf> = WalkDir::new(dir)
        .sort(true)
        .skip_hidden(false)
        .max_depth(depth)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                unreadable.push(e.to_string());
                None
            }
        })
        .filter(|e| is_svg_name(e.file_name()))
        .map(|e| (e.file_type(), e.path()))
        .filter(|(file_type, path)| {
            file_type.is_file() || (file_type.is_symlink() && path.is_file())
        })
        .map(|(_, path)| path)
        .filter(|path| !exclude.is_some_and(|out| is_excluded(path, out)))
        .collect();

    (files, unreadable)
}

fn is_excluded(path: &Path, exclude: &Path) -> bool {
    path.file_name() == exclude.file_name() && same_file(path, exclude)
}
