//! Subcommands of the `accept-lang` binary.

mod parse;
mod pick;

pub use parse::{ParseArgs, render_parse, run_parse};
pub use pick::{PickArgs, PickReport, resolve_pick, run_pick};
