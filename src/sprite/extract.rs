//! Symbol extraction: raw svg text -> `<symbol>` body.
//!
//! Purely textual. The outer wrapper is located with regexes, nothing is
//! parsed into a tree, and markup inside the wrapper is passed through
//! unchanged apart from the optional block stripping.
//!
//! # Steps
//!
//! ```text
//! raw svg
//!   │  drop <?xml ...?> and <!DOCTYPE ...>
//!   │  find outer <svg ...> and the first </svg> after it, read viewBox
//!   │  keep only the text between the two tags
//!   │  drop <defs>/<metadata>/<title> blocks (configurable)
//!   ▼  trim + reject leftover wrapper tokens
//! SymbolRecord { id, view_box, inner_markup }
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::ExtractError;
use crate::config::StripTag;

/// Options controlling how a file is reduced to a symbol.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// viewBox used when the source has none.
    pub default_view_box: String,
    /// Derive `0 0 W H` from numeric width/height before using the default.
    pub size_fallback: bool,
    /// Blocks removed from the symbol body.
    pub strip: Vec<StripTag>,
}

/// One `<symbol>` worth of data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    pub id: String,
    pub view_box: String,
    pub inner_markup: String,
}

impl SymbolRecord {
    /// Whether the id is usable as an XML `id` attribute.
    ///
    /// Only whitespace and emptiness are checked. A leading digit is valid
    /// in HTML5 and accepted.
    pub fn has_valid_id(&self) -> bool {
        !self.id.is_empty() && !self.id.chars().any(char::is_whitespace)
    }
}

static RE_XML_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<\?xml\b.*?\?>").unwrap());

static RE_DOCTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!DOCTYPE\b(?:[^\[>]*\[.*?\])?[^>]*>").unwrap());

/// Opening tag; `>` inside quoted attribute values does not end it.
static RE_SVG_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<svg\b(?:[^>"']|"[^"]*"|'[^']*')*>"#).unwrap());

static RE_SVG_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</svg\s*>").unwrap());

static RE_VIEW_BOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\sviewBox\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

static RE_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\swidth\s*=\s*["']\s*(\d*\.?\d+)\s*(?:px)?\s*["']"#).unwrap()
});

static RE_HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\sheight\s*=\s*["']\s*(\d*\.?\d+)\s*(?:px)?\s*["']"#).unwrap()
});

/// Build the removal pattern for one block element, matching both the
/// self-closing and the paired form.
fn block_pattern(tag: &str) -> Regex {
    Regex::new(&format!(
        r"(?is)<{tag}\b[^>]*/>|<{tag}\b[^>]*>.*?</{tag}\s*>"
    ))
    .unwrap()
}

static RE_DEFS: LazyLock<Regex> = LazyLock::new(|| block_pattern("defs"));
static RE_METADATA: LazyLock<Regex> = LazyLock::new(|| block_pattern("metadata"));
static RE_TITLE: LazyLock<Regex> = LazyLock::new(|| block_pattern("title"));

fn strip_pattern(tag: StripTag) -> &'static Regex {
    match tag {
        StripTag::Defs => &RE_DEFS,
        StripTag::Metadata => &RE_METADATA,
        StripTag::Title => &RE_TITLE,
    }
}

/// Tokens that must never survive into a symbol body.
const FORBIDDEN_TOKENS: [(&str, &str); 4] = [
    ("<svg", "<svg"),
    ("</svg", "</svg"),
    ("<?xml", "<?xml"),
    ("<!doctype", "<!DOCTYPE"),
];

/// Turn the text of one svg file into a [`SymbolRecord`] keyed by `id`.
///
/// # Errors
///
/// - [`ExtractError::MissingOpenTag`] / [`ExtractError::MissingCloseTag`]
///   when the outer wrapper cannot be found (self-closing root, truncated file,
///   not an svg at all)
/// - [`ExtractError::LeftoverToken`] when the remaining body still contains
///   a nested `<svg`, a stray `</svg`, `<?xml` or `<!DOCTYPE`
pub fn extract_symbol(
    raw: &str,
    id: &str,
    options: &ExtractOptions,
) -> Result<SymbolRecord, ExtractError> {
    let text = RE_XML_DECL.replace_all(raw, "");
    let text = RE_DOCTYPE.replace_all(&text, "");

    let open = RE_SVG_OPEN
        .find(&text)
        .ok_or(ExtractError::MissingOpenTag)?;
    // First close after the root; text past it is ignored
    // and a nested <svg> is left in the body for check_leftovers.
    let close = RE_SVG_CLOSE
        .find(&text[open.end()..])
        .ok_or(ExtractError::MissingCloseTag)?;

    let view_box = resolve_view_box(open.as_str(), options);

    let body_end = open.end() + close.start();
    let mut body = text[open.end()..body_end].to_string();
    for tag in &options.strip {
        body = strip_pattern(*tag).replace_all(&body, "").into_owned();
    }

    let inner_markup = body.trim().to_string();
    check_leftovers(&inner_markup)?;

    Ok(SymbolRecord {
        id: id.to_string(),
        view_box,
        inner_markup,
    })
}

/// viewBox from the opening tag, or the configured fallback chain.
fn resolve_view_box(open_tag: &str, options: &ExtractOptions) -> String {
    if let Some(caps) = RE_VIEW_BOX.captures(open_tag) {
        let value = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        if !value.trim().is_empty() {
            return value.to_string();
        }
    }

    if options.size_fallback
        && let Some(width) = RE_WIDTH.captures(open_tag).map(|c| c[1].to_string())
        && let Some(height) = RE_HEIGHT.captures(open_tag).map(|c| c[1].to_string())
    {
        return format!("0 0 {width} {height}");
    }

    options.default_view_box.clone()
}

fn check_leftovers(markup: &str) -> Result<(), ExtractError> {
    let lower = markup.to_ascii_lowercase();
    for (needle, label) in FORBIDDEN_TOKENS {
        if lower.contains(needle) {
            return Err(ExtractError::LeftoverToken(label));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ExtractOptions {
        ExtractOptions {
            default_view_box: "0 0 72 72".to_string(),
            size_fallback: false,
            strip: vec![StripTag::Metadata, StripTag::Title],
        }
    }

    #[test]
    fn test_viewbox_copied_verbatim() {
        let record =
            extract_symbol(r#"<svg viewBox="0 0 36 36"><circle r="10"/></svg>"#, "smile", &options())
                .unwrap();
        assert_eq!(record.id, "smile");
        assert_eq!(record.view_box, "0 0 36 36");
        assert_eq!(record.inner_markup, r#"<circle r="10"/>"#);
    }

    #[test]
    fn test_viewbox_default_and_xml_decl_removed() {
        let raw = r#"<?xml version="1.0"?><svg width="72" height="72"><path d="M0 0"/></svg>"#;
        let record = extract_symbol(raw, "sad", &options()).unwrap();
        assert_eq!(record.view_box, "0 0 72 72");
        assert_eq!(record.inner_markup, r#"<path d="M0 0"/>"#);
    }

    #[test]
    fn test_viewbox_single_quotes_and_odd_spacing() {
        let raw = "<svg\n  xmlns='http://www.w3.org/2000/svg'\n  viewBox = '-1 -1 26 26'\n><g/></svg>";
        let record = extract_symbol(raw, "x", &options()).unwrap();
        assert_eq!(record.view_box, "-1 -1 26 26");
        assert_eq!(record.inner_markup, "<g/>");
    }

    #[test]
    fn test_blank_viewbox_falls_back() {
        let record = extract_symbol(r#"<svg viewBox=""><g/></svg>"#, "x", &options()).unwrap();
        assert_eq!(record.view_box, "0 0 72 72");
    }

    #[test]
    fn test_prefixed_viewbox_attribute_ignored() {
        let raw = r#"<svg data-viewBox="1 2 3 4"><g/></svg>"#;
        let record = extract_symbol(raw, "x", &options()).unwrap();
        assert_eq!(record.view_box, "0 0 72 72");
    }

    #[test]
    fn test_size_fallback() {
        let opts = ExtractOptions {
            size_fallback: true,
            ..options()
        };
        let raw = r#"<svg width="24px" height="16"><g/></svg>"#;
        let record = extract_symbol(raw, "x", &opts).unwrap();
        assert_eq!(record.view_box, "0 0 24 16");

        // viewBox still wins over the size attributes
        let raw = r#"<svg width="24" height="16" viewBox="0 0 12 8"><g/></svg>"#;
        let record = extract_symbol(raw, "x", &opts).unwrap();
        assert_eq!(record.view_box, "0 0 12 8");

        // percentages are not sizes
        let raw = r#"<svg width="100%" height="100%"><g/></svg>"#;
        let record = extract_symbol(raw, "x", &opts).unwrap();
        assert_eq!(record.view_box, "0 0 72 72");
    }

    #[test]
    fn test_doctype_and_comments_removed() {
        let raw = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!-- Generator: Sketch -->
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <path d="M1 1"/>
</svg>
"#;
        let record = extract_symbol(raw, "icon", &options()).unwrap();
        assert_eq!(record.inner_markup, r#"<path d="M1 1"/>"#);
        assert_eq!(record.view_box, "0 0 24 24");
    }

    #[test]
    fn test_doctype_with_internal_subset() {
        let raw = r#"<!DOCTYPE svg [ <!ENTITY ns "http://x"> ]><svg><g/></svg>"#;
        let record = extract_symbol(raw, "x", &options()).unwrap();
        assert_eq!(record.inner_markup, "<g/>");
    }

    #[test]
    fn test_strip_metadata_and_title() {
        let raw = r#"<svg viewBox="0 0 1 1"><title>Icon</title><metadata><rdf:RDF/></metadata><defs><linearGradient id="g"/></defs><rect fill="url(#g)"/></svg>"#;
        let record = extract_symbol(raw, "x", &options()).unwrap();
        assert_eq!(
            record.inner_markup,
            r#"<defs><linearGradient id="g"/></defs><rect fill="url(#g)"/>"#
        );
    }

    #[test]
    fn test_strip_defs_including_self_closing() {
        let opts = ExtractOptions {
            strip: vec![StripTag::Defs],
            ..options()
        };
        let raw = "<svg><defs/><defs id=\"a\">\n<clipPath/>\n</defs><rect/><title>kept</title></svg>";
        let record = extract_symbol(raw, "x", &opts).unwrap();
        assert_eq!(record.inner_markup, "<rect/><title>kept</title>");
    }

    #[test]
    fn test_strip_disabled() {
        let opts = ExtractOptions {
            strip: Vec::new(),
            ..options()
        };
        let raw = "<svg><title>t</title><rect/></svg>";
        let record = extract_symbol(raw, "x", &opts).unwrap();
        assert_eq!(record.inner_markup, "<title>t</title><rect/>");
    }

    #[test]
    fn test_strip_does_not_touch_similar_names() {
        let raw = "<svg><titleCase/><rect/></svg>";
        let record = extract_symbol(raw, "x", &options()).unwrap();
        assert_eq!(record.inner_markup, "<titleCase/><rect/>");
    }

    #[test]
    fn test_unterminated_close_tag() {
        let result = extract_symbol("<svg><rect></svg", "bad", &options());
        assert_eq!(result, Err(ExtractError::MissingCloseTag));
    }

    #[test]
    fn test_self_closing_root() {
        let result = extract_symbol(r#"<svg viewBox="0 0 1 1"/>"#, "empty", &options());
        assert_eq!(result, Err(ExtractError::MissingCloseTag));
    }

    #[test]
    fn test_not_svg() {
        let result = extract_symbol("<html><body/></html>", "page", &options());
        assert_eq!(result, Err(ExtractError::MissingOpenTag));
    }

    #[test]
    fn test_svg_prefix_tag_is_not_root() {
        let result = extract_symbol("<svgz></svg>", "odd", &options());
        assert_eq!(result, Err(ExtractError::MissingOpenTag));
    }

    #[test]
    fn test_nested_svg_rejected() {
        let raw = "<svg><svg x=\"1\"><rect/></svg></svg>";
        let result = extract_symbol(raw, "nested", &options());
        assert_eq!(result, Err(ExtractError::LeftoverToken("<svg")));
    }

    #[test]
    fn test_inner_never_contains_wrapper_tokens() {
        let inputs = [
            r#"<?xml version="1.0"?><svg viewBox="0 0 1 1"><g/></svg>"#,
            "<!DOCTYPE svg><SVG><g/></SVG>",
            "\u{feff}<svg>\n<path/>\n</svg>\n<!-- trailing -->",
        ];
        for raw in inputs {
            let record = extract_symbol(raw, "x", &options()).unwrap();
            let lower = record.inner_markup.to_ascii_lowercase();
            assert!(!lower.contains("<svg"), "{raw}");
            assert!(!lower.contains("<?xml"), "{raw}");
            assert!(!lower.contains("<!doctype"), "{raw}");
        }
    }

    #[test]
    fn test_trailing_comment_after_root_ignored() {
        let raw = "<svg viewBox=\"0 0 1 1\"><g/></svg>\n<!-- end of </svg> -->";
        let record = extract_symbol(raw, "x", &options()).unwrap();
        assert_eq!(record.inner_markup, "<g/>");
        assert_eq!(record.view_box, "0 0 1 1");
    }

    #[test]
    fn test_stray_close_tag_rejected() {
        let result = extract_symbol("<svg><g/></svgx></svg>", "x", &options());
        assert_eq!(result, Err(ExtractError::LeftoverToken("</svg")));
    }

    #[test]
    fn test_gt_inside_quoted_attribute() {
        let raw = r#"<svg data-note="a>b" viewBox="0 0 5 5"><g/></svg>"#;
        let record = extract_symbol(raw, "x", &options()).unwrap();
        assert_eq!(record.view_box, "0 0 5 5");
        assert_eq!(record.inner_markup, "<g/>");

        let raw = "<svg data-note='x>y'><g/></svg>";
        let record = extract_symbol(raw, "x", &options()).unwrap();
        assert_eq!(record.view_box, "0 0 72 72");
        assert_eq!(record.inner_markup, "<g/>");
    }

    #[test]
    fn test_valid_id() {
        let mut record = extract_symbol("<svg></svg>", "ok-1", &options()).unwrap();
        assert!(record.has_valid_id());
        assert_eq!(record.inner_markup, "");
        record.id = "has space".into();
        assert!(!record.has_valid_id());
    }
}
