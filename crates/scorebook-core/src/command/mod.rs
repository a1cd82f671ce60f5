//! Parsing of score commands written in prefix form.
//!
//! - `Prefix` - argument prefixes (`n/`, `v/`, `d/`)
//! - `tokenize`, `ArgumentMap` - split a command line on prefixes
//! - `parse_score` - build a `ScoreRecord` from prefix form

mod parser;
mod prefix;

pub use parser::*;
pub use prefix::*;
