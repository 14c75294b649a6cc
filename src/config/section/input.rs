//! `[input]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [input]
//! dir = "icons"        # Directory holding the source .svg files
//! recursive = false    # Descend into subdirectories
//! ```

use serde::Deserialize;
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Source directory (relative to the config file).
    pub dir: PathBuf,

    /// Scan subdirectories too, flattening all files into one sprite.
    pub recursive: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("icons"),
            recursive: false,
        }
    }
}

impl InputConfig {
    pub const DIR: FieldPath = FieldPath::new("input.dir");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.dir.as_os_str().is_empty() {
            diag.error(Self::DIR, "input directory must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.input.dir, PathBuf::from("icons"));
        assert!(!config.input.recursive);
    }

    #[test]
    fn test_parse() {
        let config = test_parse_config("[input]\ndir = \"assets/emoji\"\nrecursive = true");
        assert_eq!(config.input.dir, PathBuf::from("assets/emoji"));
        assert!(config.input.recursive);
    }
}
