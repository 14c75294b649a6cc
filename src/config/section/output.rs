//! `[output]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! path = "sprite.svg"   # Sprite file (relative to the config file)
//! defs = true           # Wrap symbols in <defs>
//! hidden = false        # Add style="display:none" to the root
//! xlink = false         # Declare xmlns:xlink on the root
//! declaration = true    # Emit <?xml version="1.0" encoding="UTF-8"?>
//! pretty = true         # One symbol per line (false = single line)
//!
//! [output.attributes]   # Extra attributes on the root <svg>
//! class = "icons"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::sprite::OutputOptions;

/// Root attributes written by the composer itself.
const RESERVED_ATTRIBUTES: [&str; 2] = ["xmlns", "xmlns:xlink"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Sprite output file.
    pub path: PathBuf,

    /// Nest symbols inside a `<defs>` element.
    pub defs: bool,

    /// Hide the root element with `style="display:none"` (for inlining in HTML).
    pub hidden: bool,

    /// Declare the xlink namespace for consumers still using `xlink:href`.
    pub xlink: bool,

    /// Emit the XML declaration line.
    pub declaration: bool,

    /// Indent symbols one per line instead of a single line.
    pub pretty: bool,

    /// Additional root attributes, emitted sorted by name.
    pub attributes: BTreeMap<String, String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("sprite.svg"),
            defs: true,
            hidden: false,
            xlink: false,
            declaration: true,
            pretty: true,
            attributes: BTreeMap::new(),
        }
    }
}

impl OutputConfig {
    pub const PATH: FieldPath = FieldPath::new("output.path");
    pub const ATTRIBUTES: FieldPath = FieldPath::new("output.attributes");

    /// Serialization options handed to the composer.
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            defs: self.defs,
            hidden: self.hidden,
            xlink: self.xlink,
            declaration: self.declaration,
            pretty: self.pretty,
            attributes: self
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.file_name().is_none() {
            diag.error_with_hint(
                Self::PATH,
                format!("`{}` does not name a file", self.path.display()),
                "use a path like \"dist/sprite.svg\"",
            );
        }

        for name in self.attributes.keys() {
            if !is_xml_name(name) {
                diag.error(Self::ATTRIBUTES, format!("`{name}` is not a valid attribute name"));
            } else if RESERVED_ATTRIBUTES.contains(&name.as_str()) {
                diag.error_with_hint(
                    Self::ATTRIBUTES,
                    format!("`{name}` is always written by sprig"),
                    "use `xlink = true` for the xlink namespace",
                );
            } else if name == "style" && self.hidden {
                diag.error_with_hint(
                    Self::ATTRIBUTES,
                    "`style` conflicts with `hidden = true`",
                    "add `display:none` to your own style instead",
                );
            }
        }
    }
}

/// Loose XML `Name` check: letter, `_` or `:` first, then name characters.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == ':')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let output = &config.output;
        assert_eq!(output.path, PathBuf::from("sprite.svg"));
        assert!(output.defs);
        assert!(!output.hidden);
        assert!(!output.xlink);
        assert!(output.declaration);
        assert!(output.pretty);
        assert!(output.attributes.is_empty());
    }

    #[test]
    fn test_attributes_sorted() {
        let config = test_parse_config("[output.attributes]\nid = \"sprite\"\nclass = \"icons\"");
        let options = config.output.output_options();
        assert_eq!(
            options.attributes,
            vec![
                ("class".to_string(), "icons".to_string()),
                ("id".to_string(), "sprite".to_string()),
            ]
        );
    }

    #[test]
    fn test_is_xml_name() {
        assert!(is_xml_name("class"));
        assert!(is_xml_name("data-set"));
        assert!(is_xml_name("aria-hidden"));
        assert!(is_xml_name("xml:lang"));
        assert!(!is_xml_name(""));
        assert!(!is_xml_name("1abc"));
        assert!(!is_xml_name("has space"));
        assert!(!is_xml_name("a\"b"));
    }

    #[test]
    fn test_validate_attributes() {
        let config = test_parse_config(
            "[output]\nhidden = true\n[output.attributes]\nxmlns = \"x\"\nstyle = \"a\"\n\"bad name\" = \"b\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.output.validate(&mut diag);
        assert_eq!(diag.errors().len(), 3);
        assert!(diag.errors().iter().all(|e| e.field == OutputConfig::ATTRIBUTES));
    }

    #[test]
    fn test_validate_path_without_file_name() {
        let output = OutputConfig {
            path: PathBuf::from(".."),
            ..OutputConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        output.validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field, OutputConfig::PATH);
    }
}
