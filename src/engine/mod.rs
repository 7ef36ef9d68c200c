//! @dose
//! purpose: The comment toggle engines: per-line rewriting and multi-line
//!     block spans. Both are pure transforms over already-loaded text.
//!
//! invariants:
//!     - File IO stays in the command layer; the engines never touch disk

mod block;
mod line;

pub use block::{toggle_block, BlockError};
pub use line::{comment_level, toggle_line};

use clap::ValueEnum;

/// Whether an invocation adds or removes comment markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Add one comment marker to matching, not-yet-commented lines
    Comment,
    /// Remove one comment level from commented lines
    Uncomment,
}
