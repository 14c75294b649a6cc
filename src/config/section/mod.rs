//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sprig.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `input`  | `[input]`    | Source directory and recursion           |
//! | `output` | `[output]`   | Sprite path and root element layout      |
//! | `symbol` | `[symbol]`   | viewBox fallback and block stripping     |
//! | `batch`  | `[build]`    | Error/duplicate policies, parallelism    |

mod batch;
mod input;
mod output;
mod symbol;

pub use batch::{BatchConfig, ErrorPolicy};
pub use input::InputConfig;
pub use output::OutputConfig;
pub use symbol::{StripTag, SymbolConfig};
