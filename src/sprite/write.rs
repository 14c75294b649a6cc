//! Sprite file output.

use std::fs;
use std::io;
use std::path::Path;

use super::SpriteError;

/// Write the sprite, replacing any existing file, and return its size.
///
/// The parent directory is not created: a missing directory usually means a
/// mistyped output path.
pub fn write_sprite(path: &Path, xml: &str) -> Result<u64, SpriteError> {
    let write_error = |source: io::Error| SpriteError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(write_error(io::Error::new(
            io::ErrorKind::NotFound,
            format!("directory `{}` does not exist", parent.display()),
        )));
    }

    fs::write(path, xml).map_err(write_error)?;
    Ok(xml.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sprite.svg");

        assert_eq!(write_sprite(&path, "<svg>old</svg>").unwrap(), 14);
        assert_eq!(write_sprite(&path, "<svg/>").unwrap(), 6);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[test]
    fn test_missing_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/sprite.svg");

        let err = write_sprite(&path, "<svg/>").unwrap_err();
        assert!(matches!(err, SpriteError::WriteError { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_output_is_directory() {
        let dir = TempDir::new().unwrap();
        let err = write_sprite(dir.path(), "<svg/>").unwrap_err();
        assert!(matches!(err, SpriteError::WriteError { .. }));
    }
}
