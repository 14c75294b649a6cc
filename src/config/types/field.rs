//! Config field path used in diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a `sprig.toml` field, e.g. `symbol.default_viewbox`.
///
/// Sections expose their paths as associated constants so diagnostics never
/// spell field names by hand:
///
/// ```ignore
/// diag.error(SymbolConfig::DEFAULT_VIEWBOX, "expected four numbers");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("`{}`", self.0).bright_blue())
    }
}
