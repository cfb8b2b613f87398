#![doc = include_str!("../README.md")]

pub mod alias;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod tag;

pub use alias::{AliasMap, DefaultAliases, Identity, MapLocale, canonical_alias, map_locale};
pub use error::PickError;
pub use matcher::{PickOptions, pick, pick_bytes, try_pick, try_pick_bytes};
pub use parser::{DEFAULT_QUALITY, parse, parse_with};
pub use tag::{LanguageTag, Subtags};
