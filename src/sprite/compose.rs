//! Sprite document composition.
//!
//! # Sprite Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <svg xmlns="http://www.w3.org/2000/svg">
//!   <defs>
//!     <symbol id="smile" viewBox="0 0 36 36"><circle r="10"/></symbol>
//!   </defs>
//! </svg>
//! ```
//!
//! Symbol bodies are inserted as-is. Nothing re-checks that the joined
//! document is well-formed, so a broken body ends up in the output.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::{SpriteError, SymbolRecord};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Serialization options for the root element and layout.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub defs: bool,
    pub hidden: bool,
    pub xlink: bool,
    pub declaration: bool,
    pub pretty: bool,
    /// Extra root attributes in output order.
    pub attributes: Vec<(String, String)>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            defs: true,
            hidden: false,
            xlink: false,
            declaration: true,
            pretty: true,
            attributes: Vec::new(),
        }
    }
}

impl OutputOptions {
    /// Root `<svg>` attributes in output order.
    pub fn root_attributes(&self) -> Vec<(&str, &str)> {
        let mut attrs = vec![("xmlns", SVG_NS)];
        if self.xlink {
            attrs.push(("xmlns:xlink", XLINK_NS));
        }
        if self.hidden {
            attrs.push(("style", "display:none"));
        }
        attrs.extend(self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        attrs
    }
}

/// Symbols in scan order, plus the file each came from.
#[derive(Debug, Default)]
pub struct SpriteDocument {
    symbols: Vec<SymbolRecord>,
    sources: FxHashMap<String, PathBuf>,
}

impl SpriteDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a symbol, refusing ids that are already present.
    ///
    /// Ids are compared exactly: `a` and `A` do not collide.
    pub fn push(&mut self, record: SymbolRecord, source: &Path) -> Result<(), SpriteError> {
        if let Some(first) = self.sources.get(&record.id) {
            return Err(SpriteError::DuplicateId {
                id: record.id,
                path: source.to_path_buf(),
                first: first.clone(),
            });
        }
        self.sources.insert(record.id.clone(), source.to_path_buf());
        self.symbols.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Serialize the sprite.
    pub fn to_xml(&self, options: &OutputOptions) -> String {
        let capacity = self
            .symbols
            .iter()
            .map(|s| s.inner_markup.len() + s.id.len() + s.view_box.len() + 48)
            .sum::<usize>()
            + 256;
        let mut xml = String::with_capacity(capacity);

        let (newline, indent) = if options.pretty { ("\n", "  ") } else { ("", "") };
        let symbol_indent = if options.defs && options.pretty { "    " } else { indent };

        if options.declaration {
            xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
            xml.push_str(newline);
        }

        xml.push_str("<svg");
        for (name, value) in options.root_attributes() {
            push_attr(&mut xml, name, value);
        }
        xml.push('>');
        xml.push_str(newline);

        if options.defs {
            xml.push_str(indent);
            xml.push_str("<defs>");
            xml.push_str(newline);
        }

        for symbol in &self.symbols {
            xml.push_str(symbol_indent);
            xml.push_str("<symbol");
            push_attr(&mut xml, "id", &symbol.id);
            push_attr(&mut xml, "viewBox", &symbol.view_box);
            xml.push('>');
            xml.push_str(&symbol.inner_markup);
            xml.push_str("</symbol>");
            xml.push_str(newline);
        }

        if options.defs {
            xml.push_str(indent);
            xml.push_str("</defs>");
            xml.push_str(newline);
        }

        xml.push_str("</svg>");
        xml.push('\n');
        xml
    }
}

#[cfg(test)]
impl SpriteDocument {
    pub fn symbols(&self) -> &[SymbolRecord] {
        &self.symbols
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

fn push_attr(xml: &mut String, name: &str, value: &str) {
    xml.push(' ');
    xml.push_str(name);
    xml.push_str("=\"");
    xml.push_str(&escape_attr(value));
    xml.push('"');
}

/// Escape special XML characters in an attribute value.
fn escape_attr(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;"),
    )
}
