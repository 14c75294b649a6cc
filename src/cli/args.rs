//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Bundle a directory of svg icons into one `<symbol>` sprite
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: nearest sprig.toml, if any)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default sprig.toml
    #[command(visible_alias = "i")]
    Init {
        /// Directory to write the config into (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Print the config template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Build the sprite file
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: SpriteArgs,

        /// Output sprite path
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Wrap symbols in <defs>
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        defs: Option<bool>,

        /// Hide the sprite root with style="display:none"
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        hidden: Option<bool>,

        /// Declare xmlns:xlink on the sprite root
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        xlink: Option<bool>,

        /// One symbol per line (false = single line)
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        pretty: Option<bool>,
    },

    /// Scan and extract without writing, report problems
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: SpriteArgs,
    },
}

/// Shared arguments for Build and Check commands
#[derive(clap::Args, Debug, Clone)]
pub struct SpriteArgs {
    /// Directory containing the .svg files
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub input: Option<PathBuf>,

    /// Scan subdirectories too
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub recursive: Option<bool>,

    /// viewBox for files without one, e.g. "0 0 24 24"
    #[arg(long = "viewbox", value_name = "X Y W H")]
    pub viewbox: Option<String>,

    /// Strip <defs>, <metadata> and <title> blocks (false = keep all)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub strip: Option<bool>,

    /// Stop at the first malformed file or duplicate id
    #[arg(short = 'A', long)]
    pub abort_on_error: bool,

    /// Extract files in parallel
    #[arg(short = 'j', long)]
    pub parallel: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// Shared sprite arguments, if the command has them.
    pub const fn sprite_args(&self) -> Option<&SpriteArgs> {
        match &self.command {
            Commands::Build { args, .. } | Commands::Check { args } => Some(args),
            Commands::Init { .. } => None,
        }
    }
}
