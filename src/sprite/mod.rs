//! Sprite assembly: scan -> extract -> compose.
//!
//! ```text
//! scan_svg_files ──► InputAsset::load ──► extract_symbol ──► SpriteDocument::push
//!   (sorted)           (per file)          (parallel ok)       (scan order, dedupe)
//! ```
//!
//! Extraction results are always consumed in scan order, so parallel and
//! sequential runs produce the same document.

mod compose;
mod error;
mod extract;
mod scan;
mod write;

pub use compose::{OutputOptions, SpriteDocument};
pub use error::{ExtractError, SpriteError};
pub use extract::{ExtractOptions, SymbolRecord, extract_symbol};
pub use scan::{base_name, scan_svg_files};
pub use write::write_sprite;

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::{ErrorPolicy, SpriteConfig};
use crate::debug;
use crate::logger::ProgressLine;

/// Progress counter name used while extracting.
pub const PROGRESS_COUNTER: &str = "svg";

/// One scanned file with its content loaded.
#[derive(Debug)]
pub struct InputAsset {
    pub path: PathBuf,
    pub base_name: String,
    pub raw_content: String,
}

impl InputAsset {
    /// Read a file as UTF-8 text.
    pub fn load(path: &Path) -> Result<Self, SpriteError> {
        let raw_content = fs::read_to_string(path).map_err(|source| SpriteError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            base_name: base_name(path),
            raw_content,
        })
    }

    /// Reduce the asset to a symbol named after the file.
    pub fn extract(&self, options: &ExtractOptions) -> Result<SymbolRecord, SpriteError> {
        extract_symbol(&self.raw_content, &self.base_name, options).map_err(|reason| {
            SpriteError::MalformedSvgInput {
                path: self.path.clone(),
                reason,
            }
        })
    }
}

/// Counters and file-level problems of one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files found by the scanner.
    pub total: usize,
    /// Symbols that made it into the document.
    pub processed: usize,
    /// Skipped files, in scan order.
    pub issues: Vec<SpriteError>,
    /// Non-fatal remarks about emitted symbols.
    pub warnings: Vec<(PathBuf, String)>,
    /// Bytes written, once the sprite is on disk.
    pub output_size: Option<u64>,
}

impl RunSummary {
    pub fn skipped(&self) -> usize {
        self.issues.len()
    }

    pub fn duplicates(&self) -> usize {
        self.issues
            .iter()
            .filter(|e| matches!(e, SpriteError::DuplicateId { .. }))
            .count()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Fail when every input was rejected.
    pub fn require_symbols(&self) -> Result<(), SpriteError> {
        if self.processed == 0 {
            return Err(SpriteError::NoSymbols { total: self.total });
        }
        Ok(())
    }
}

/// Build a sprite document from scanned files.
///
/// Bad files are skipped or abort the run according to `[build]`. The
/// returned document may be empty; see [`RunSummary::require_symbols`].
pub fn assemble(
    files: &[PathBuf],
    config: &SpriteConfig,
    progress: Option<&ProgressLine>,
) -> Result<(SpriteDocument, RunSummary), SpriteError> {
    let options = config.symbol.extract_options();
    let process = |path: &PathBuf| {
        let result = InputAsset::load(path).and_then(|asset| asset.extract(&options));
        if let Some(progress) = progress {
            progress.inc(PROGRESS_COUNTER);
        }
        result
    };

    let results: Vec<Result<SymbolRecord, SpriteError>> = if config.build.parallel {
        files.par_iter().map(process).collect()
    } else {
        files.iter().map(process).collect()
    };

    let mut document = SpriteDocument::new();
    let mut summary = RunSummary {
        total: files.len(),
        ..RunSummary::default()
    };

    for (path, result) in files.iter().zip(results) {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                if config.build.on_error == ErrorPolicy::Abort {
                    return Err(err);
                }
                debug!("skip"; "{}", err);
                summary.issues.push(err);
                continue;
            }
        };

        if !record.has_valid_id() {
            summary.warnings.push((
                path.clone(),
                format!("id `{}` is not a valid XML id", record.id),
            ));
        }

        if let Err(err) = document.push(record, path) {
            if config.build.on_duplicate == ErrorPolicy::Abort {
                return Err(err);
            }
            debug!("skip"; "{}", err);
            summary.issues.push(err);
        }
    }

    summary.processed = document.len();
    Ok((document, summary))
}
