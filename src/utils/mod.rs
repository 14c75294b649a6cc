//! Shared helpers.
//!
//! - [`fmt`]: pluralization and byte-size formatting for reports
//! - [`path`]: path normalization and config path resolution

pub mod fmt;
pub mod path;

pub use fmt::{format_size, plural_count, plural_s};
