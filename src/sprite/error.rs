//! Sprite assembly error types.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single svg file could not be turned into a symbol.
///
/// Produced by the pure extractor, which knows nothing about paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no opening <svg> tag")]
    MissingOpenTag,

    #[error("no closing </svg> tag")]
    MissingCloseTag,

    #[error("`{0}` left inside symbol markup")]
    LeftoverToken(&'static str),
}

/// Errors raised while building a sprite.
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("input directory `{}` does not exist or is not readable", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("no .svg files found in `{}`", .path.display())]
    NoInputFiles { path: PathBuf },

    #[error("malformed svg `{}`: {reason}", .path.display())]
    MalformedSvgInput { path: PathBuf, reason: ExtractError },

    #[error("duplicate symbol id `{id}` in `{}` (first defined by `{}`)", .path.display(), .first.display())]
    DuplicateId {
        id: String,
        path: PathBuf,
        first: PathBuf,
    },

    #[error("cannot read `{}`", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("all {total} input files were rejected, refusing to write an empty sprite")]
    NoSymbols { total: usize },

    #[error("cannot write sprite to `{}`", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SpriteError {
    /// Input file this error is about, for file-level reporting.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::MalformedSvgInput { path, .. }
            | Self::DuplicateId { path, .. }
            | Self::Unreadable { path, .. } => Some(path),
            _ => None,
        }
    }
}
