//! `sprig init`: write a commented default `sprig.toml`.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::CONFIG_FILE;
use crate::log;

/// Commented config with every built-in default spelled out.
const CONFIG_TEMPLATE: &str = r#"# Source svg files
[input]
dir = "icons"              # Directory holding the .svg files
recursive = false          # Also scan subdirectories

# Sprite file layout
[output]
path = "sprite.svg"        # Written file (relative to this config)
defs = true                # Wrap symbols in <defs>
hidden = false             # Add style="display:none" to the root <svg>
xlink = false              # Declare xmlns:xlink on the root <svg>
declaration = true         # Emit the <?xml ...?> line
pretty = true              # One symbol per line (false = single line)

# Extra attributes on the root <svg>
[output.attributes]
# class = "icons"

# Per-symbol extraction
[symbol]
default_viewbox = "0 0 72 72"   # viewBox for files without one
size_fallback = false           # Try "0 0 width height" before the default
strip = ["metadata", "title"]   # Blocks removed from symbols: defs | metadata | title

# Batch policies
[build]
on_error = "skip"          # Malformed or unreadable files: skip | abort
on_duplicate = "skip"      # Colliding ids: skip (keep first) | abort
parallel = false           # Extract files on all cores
"#;

/// Generate sprig.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        "# sprig configuration file (v{})\n\n{CONFIG_TEMPLATE}",
        env!("CARGO_PKG_VERSION")
    )
}

/// Write `sprig.toml` into `dir`, or print it when `dry_run` is set.
///
/// An existing config is never overwritten.
pub fn init_config(dir: &Path, dry_run: bool) -> Result<()> {
    let content = generate_config_template();
    if dry_run {
        print!("{content}");
        return Ok(());
    }

    if !dir.is_dir() {
        bail!("directory `{}` does not exist", dir.display());
    }

    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        bail!("`{}` already exists", path.display());
    }

    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
