//! `[build]` section configuration.
//!
//! Batch policies for a sprite run.
//!
//! # Example
//!
//! ```toml
//! [build]
//! on_error = "skip"       # Bad files: skip | abort
//! on_duplicate = "skip"   # Colliding ids: skip (keep first) | abort
//! parallel = false        # Extract files on a thread pool
//! ```

use serde::Deserialize;

/// What to do when one input file is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Record the problem, leave the file out, keep going.
    #[default]
    Skip,
    /// Stop the run on the first problem.
    Abort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Policy for unreadable or malformed files.
    pub on_error: ErrorPolicy,

    /// Policy for files whose id is already taken.
    pub on_duplicate: ErrorPolicy,

    /// Extract files in parallel. Output order is unaffected.
    pub parallel: bool,
}
