//! End-of-run report: counts plus per-file problems.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;

use crate::config::SpriteConfig;
use crate::sprite::{RunSummary, SpriteError};
use crate::utils::{format_size, plural_count, plural_s};

/// File-level report entries grouped by section, then by file.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Malformed or unreadable inputs.
    pub skipped: BTreeMap<String, Vec<String>>,
    /// Files whose id was already taken.
    pub duplicates: BTreeMap<String, Vec<String>>,
    /// Emitted symbols with questionable ids.
    pub warnings: BTreeMap<String, Vec<String>>,
    total: usize,
    processed: usize,
    duplicate_count: usize,
    output: Option<(PathBuf, u64)>,
}

impl RunReport {
    /// Collect a summary, with paths shown relative to the config root.
    pub fn new(summary: &RunSummary, config: &SpriteConfig) -> Self {
        let display = |path: &Path| config.root_relative(path).display().to_string();

        let mut report = Self {
            total: summary.total,
            processed: summary.processed,
            duplicate_count: summary.duplicates(),
            output: summary
                .output_size
                .map(|size| (config.root_relative(&config.output.path), size)),
            ..Self::default()
        };

        for issue in &summary.issues {
            let Some(path) = issue.path() else {
                continue;
            };
            let (section, reason) = match issue {
                SpriteError::DuplicateId { id, first, .. } => (
                    &mut report.duplicates,
                    format!("`{id}` already defined by {}", display(first)),
                ),
                SpriteError::MalformedSvgInput { reason, .. } => {
                    (&mut report.skipped, reason.to_string())
                }
                SpriteError::Unreadable { source, .. } => (&mut report.skipped, source.to_string()),
                _ => continue,
            };
            section.entry(display(path)).or_default().push(reason);
        }

        for (path, message) in &summary.warnings {
            report
                .warnings
                .entry(display(path))
                .or_default()
                .push(message.clone());
        }

        report
    }

    pub fn issue_count(&self) -> usize {
        count(&self.skipped) + count(&self.duplicates)
    }

    /// Print all sections to stderr (skipped -> duplicates -> warnings).
    pub fn print(&self) {
        Self::print_section("skipped", &self.skipped, true);
        Self::print_section("duplicates", &self.duplicates, true);
        Self::print_section("warnings", &self.warnings, false);
    }

    fn print_section(name: &str, entries: &BTreeMap<String, Vec<String>>, is_error: bool) {
        if entries.is_empty() {
            return;
        }
        eprintln!();

        let header = if is_error {
            name.red().bold().to_string()
        } else {
            name.yellow().bold().to_string()
        };
        let entry_count = count(entries);
        eprintln!("{} {}", header, format!("({})", plural_count(entry_count, "file")).dimmed());

        for (path, reasons) in entries {
            for reason in reasons {
                eprintln!(
                    "{}{}{} {} {}",
                    "[".dimmed(),
                    path.cyan(),
                    "]".dimmed(),
                    "→".red(),
                    reason
                );
            }
        }
    }
}

fn count(entries: &BTreeMap<String, Vec<String>>) -> usize {
    entries.values().map(Vec::len).sum()
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} {}",
            self.processed.to_string().green().bold(),
            self.total,
            format!("file{} included", plural_s(self.total)).dimmed()
        )?;

        let issues = self.issue_count();
        if issues > 0 {
            write!(
                f,
                ", {} {}",
                issues.to_string().red().bold(),
                "skipped".dimmed()
            )?;
            if self.duplicate_count > 0 {
                write!(
                    f,
                    " {}",
                    format!("({})", plural_count(self.duplicate_count, "duplicate id")).dimmed()
                )?;
            }
        }

        if let Some((path, size)) = &self.output {
            write!(
                f,
                " {} {} ({})",
                "→".dimmed(),
                path.display(),
                format_size(*size)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::ExtractError;

    fn summary() -> RunSummary {
        RunSummary {
            total: 4,
            processed: 2,
            issues: vec![
                SpriteError::MalformedSvgInput {
                    path: PathBuf::from("/p/icons/bad.svg"),
                    reason: ExtractError::MissingCloseTag,
                },
                SpriteError::DuplicateId {
                    id: "home".into(),
                    path: PathBuf::from("/p/icons/b/home.svg"),
                    first: PathBuf::from("/p/icons/a/home.svg"),
                },
            ],
            warnings: vec![(PathBuf::from("/p/icons/a b.svg"), "bad id".into())],
            output_size: Some(2048),
        }
    }

    fn config() -> SpriteConfig {
        let mut config = SpriteConfig::default();
        config.set_root(Path::new("/p"));
        config.output.path = PathBuf::from("/p/sprite.svg");
        config
    }

    #[test]
    fn test_grouping() {
        let report = RunReport::new(&summary(), &config());
        assert_eq!(report.issue_count(), 2);
        assert_eq!(report.skipped["icons/bad.svg"], vec!["no closing </svg> tag"]);
        assert_eq!(
            report.duplicates["icons/b/home.svg"],
            vec!["`home` already defined by icons/a/home.svg"]
        );
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_display_summary() {
        let report = RunReport::new(&summary(), &config());
        let line = report.to_string();
        assert!(line.contains(" of 4 "));
        assert!(line.contains("files included"));
        assert!(line.contains("skipped"));
        assert!(line.contains("(1 duplicate id)"));
        assert!(line.ends_with("sprite.svg (2.00 KB)"));
    }

    #[test]
    fn test_clean_run() {
        let summary = RunSummary {
            total: 1,
            processed: 1,
            ..RunSummary::default()
        };
        let report = RunReport::new(&summary, &config());
        assert_eq!(report.issue_count(), 0);
        assert!(!report.to_string().contains("duplicate"));
        assert!(report.skipped.is_empty());
    }
}
