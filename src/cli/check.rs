//! `sprig check`: run the assembler without writing anything.

use anyhow::{Result, bail};

use super::report::RunReport;
use crate::config::SpriteConfig;
use crate::log;
use crate::logger::ProgressLine;
use crate::sprite::{self, PROGRESS_COUNTER};
use crate::utils::{format_size, plural_count};

/// Report every problem the next build would hit.
///
/// Fails when at least one file would be skipped.
pub fn check_sprite(config: &SpriteConfig) -> Result<()> {
    let files = sprite::scan_svg_files(
        &config.input.dir,
        config.input.recursive,
        Some(&config.output.path),
    )?;
    log!("check"; "checking {}", plural_count(files.len(), "file"));

    let progress = ProgressLine::for_terminal("check", &[(PROGRESS_COUNTER, files.len())]);
    let (document, summary) = sprite::assemble(&files, config, progress.as_ref())?;
    if let Some(progress) = progress {
        progress.finish();
    }

    let report = RunReport::new(&summary, config);
    report.print();

    if summary.has_issues() {
        bail!("check failed: {}", plural_count(summary.skipped(), "problem"));
    }

    let size = document.to_xml(&config.output.output_options()).len() as u64;
    log!(
        "check"; "all {} valid, sprite would be {}",
        plural_count(summary.processed, "symbol"),
        format_size(size)
    );
    Ok(())
}
