//! `[symbol]` section configuration.
//!
//! Controls how each source file is reduced to a `<symbol>`.
//!
//! # Example
//!
//! ```toml
//! [symbol]
//! default_viewbox = "0 0 72 72"   # Used when a file has no viewBox
//! size_fallback = false           # Try "0 0 width height" before the default
//! strip = ["metadata", "title"]   # Blocks removed from symbols: defs | metadata | title
//! ```
//!
//! Stripping `defs` drops gradients and clip paths along with their ids, so
//! it is off by default.

use serde::Deserialize;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::sprite::ExtractOptions;

/// Block element that can be removed from symbol bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StripTag {
    Defs,
    Metadata,
    Title,
}

impl StripTag {
    pub const ALL: [Self; 3] = [Self::Defs, Self::Metadata, Self::Title];
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    /// viewBox for files that do not declare one ("minX minY width height").
    pub default_viewbox: String,

    /// Derive the viewBox from numeric `width`/`height` when it is missing.
    pub size_fallback: bool,

    /// Elements removed from every symbol body.
    pub strip: Vec<StripTag>,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            default_viewbox: "0 0 72 72".to_string(),
            size_fallback: false,
            strip: vec![StripTag::Metadata, StripTag::Title],
        }
    }
}

impl SymbolConfig {
    pub const DEFAULT_VIEWBOX: FieldPath = FieldPath::new("symbol.default_viewbox");
    pub const STRIP: FieldPath = FieldPath::new("symbol.strip");

    /// Enable or disable stripping of every supported block.
    pub fn set_strip_all(&mut self, enabled: bool) {
        self.strip = if enabled {
            StripTag::ALL.to_vec()
        } else {
            Vec::new()
        };
    }

    /// Options handed to the extractor.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            default_view_box: self.default_viewbox.clone(),
            size_fallback: self.size_fallback,
            strip: self.strip.clone(),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Err(reason) = check_view_box(&self.default_viewbox) {
            diag.error_with_hint(
                Self::DEFAULT_VIEWBOX,
                format!("invalid viewBox `{}`: {reason}", self.default_viewbox),
                "use four numbers, e.g. \"0 0 24 24\"",
            );
        }

        let mut seen = Vec::with_capacity(self.strip.len());
        for tag in &self.strip {
            if seen.contains(tag) {
                diag.warn(Self::STRIP, format!("`{tag:?}` listed more than once"));
            }
            seen.push(*tag);
        }
    }
}

/// Check a viewBox value: four numbers separated by whitespace and/or
/// commas, with positive width and height.
pub fn check_view_box(value: &str) -> Result<(), &'static str> {
    let parts: Vec<&str> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() != 4 {
        return Err("expected four numbers");
    }

    let mut numbers = [0.0f64; 4];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| "not a number")?;
    }
    if numbers[2] <= 0.0 || numbers[3] <= 0.0 {
        return Err("width and height must be positive");
    }
    Ok(())
}
