//! `sprig build`: scan, assemble and write the sprite.

use anyhow::{Context, Result};
use std::time::Instant;

use super::report::RunReport;
use crate::config::SpriteConfig;
use crate::logger::ProgressLine;
use crate::sprite::{self, PROGRESS_COUNTER, RunSummary};
use crate::utils::plural_count;
use crate::{debug, log};

/// Build the sprite described by `config` and return the run summary.
///
/// Per-file problems are reported and skipped unless `[build]` says abort.
/// Nothing is written when no symbol survives.
pub fn build_sprite(config: &SpriteConfig) -> Result<RunSummary> {
    let started = Instant::now();
    if let Some(path) = &config.config_path {
        debug!("build"; "using config {}", path.display());
    }

    let files = sprite::scan_svg_files(
        &config.input.dir,
        config.input.recursive,
        Some(&config.output.path),
    )?;
    debug!(
        "build"; "found {} in {}",
        plural_count(files.len(), "svg file"),
        config.input.dir.display()
    );

    let progress = ProgressLine::for_terminal("build", &[(PROGRESS_COUNTER, files.len())]);
    let (document, mut summary) = sprite::assemble(&files, config, progress.as_ref())?;
    if let Some(progress) = progress {
        progress.finish();
    }

    if let Err(err) = summary.require_symbols() {
        RunReport::new(&summary, config).print();
        return Err(err.into());
    }

    let xml = document.to_xml(&config.output.output_options());
    let size = sprite::write_sprite(&config.output.path, &xml)
        .with_context(|| format!("after assembling {}", plural_count(document.len(), "symbol")))?;
    summary.output_size = Some(size);

    let report = RunReport::new(&summary, config);
    report.print();
    log!("build"; "{} in {:.2?}", report, started.elapsed());

    Ok(summary)
}
