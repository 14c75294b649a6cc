//! Sprite configuration management for `sprig.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── input      # [input]
//! │   ├── output     # [output]
//! │   ├── symbol     # [symbol]
//! │   └── batch      # [build]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SpriteConfig (this file)
//! ```
//!
//! # Precedence
//!
//! CLI flags > `sprig.toml` > built-in defaults. The config file is optional;
//! without one, paths resolve against the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BatchConfig, ErrorPolicy, InputConfig, OutputConfig, StripTag, SymbolConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, SpriteArgs},
    log,
    utils::path::resolve_against,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "sprig.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sprig.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpriteConfig {
    /// Absolute path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Source files
    #[serde(default)]
    pub input: InputConfig,

    /// Sprite file layout
    #[serde(default)]
    pub output: OutputConfig,

    /// Per-symbol extraction
    #[serde(default)]
    pub symbol: SymbolConfig,

    /// Batch policies
    #[serde(default)]
    pub build: BatchConfig,
}

impl SpriteConfig {
    /// Load configuration for a build/check command.
    ///
    /// An explicit `--config` must exist; otherwise `sprig.toml` is looked up
    /// from the cwd upward and defaults are used when none is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let config_path = match &cli.config {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Some(path)
            }
            None => find_config_file(Path::new(CONFIG_FILE), &cwd),
        };

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| cwd.clone(), Path::to_path_buf);
        config.config_path = config_path;
        config.set_root(&root);
        config.normalize_paths();
        config.apply_command_options(cli, &cwd);

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("in `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the root, for display
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    ///
    /// CLI paths resolve against the cwd, not the config root.
    fn apply_command_options(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(args) = cli.sprite_args() {
            self.apply_sprite_args(args, cwd);
        }

        if let Commands::Build {
            output,
            defs,
            hidden,
            xlink,
            pretty,
            ..
        } = &cli.command
        {
            if let Some(output) = output {
                self.output.path = resolve_against(output, cwd);
            }
            Self::update_option(&mut self.output.defs, defs.as_ref());
            Self::update_option(&mut self.output.hidden, hidden.as_ref());
            Self::update_option(&mut self.output.xlink, xlink.as_ref());
            Self::update_option(&mut self.output.pretty, pretty.as_ref());
        }
    }

    /// Apply arguments shared by build and check.
    fn apply_sprite_args(&mut self, args: &SpriteArgs, cwd: &Path) {
        // Set verbose mode globally
        crate::logger::set_verbose(args.verbose);

        if let Some(input) = &args.input {
            self.input.dir = resolve_against(input, cwd);
        }
        Self::update_option(&mut self.input.recursive, args.recursive.as_ref());
        Self::update_option(&mut self.symbol.default_viewbox, args.viewbox.as_ref());
        if let Some(strip) = args.strip {
            self.symbol.set_strip_all(strip);
        }
        if args.abort_on_error {
            self.build.on_error = ErrorPolicy::Abort;
            self.build.on_duplicate = ErrorPolicy::Abort;
        }
        if args.parallel {
            self.build.parallel = true;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve configured paths against the root directory.
    fn normalize_paths(&mut self) {
        let root = crate::utils::path::normalize_path(&self.root);
        self.input.dir = resolve_against(&self.input.dir, &root);
        self.output.path = resolve_against(&self.output.path, &root);
        self.set_root(&root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.input.validate(&mut diag);
        self.output.validate(&mut diag);
        self.symbol.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Invalid(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SpriteConfig {
    let (parsed, ignored) = SpriteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
