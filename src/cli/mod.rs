//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
pub mod init;
mod report;

pub use args::{Cli, Commands, SpriteArgs};
