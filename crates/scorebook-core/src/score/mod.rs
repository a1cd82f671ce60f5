//! Score types.
//!
//! - `Title` - validated score name
//! - `ScoreValue` - bounded numeric result
//! - `ScoreRecord` - immutable name/value/date triple
//! - `UniqueScoreList` - duplicate-free collection of scores

mod list;
mod record;
mod title;
mod value;

pub use list::*;
pub use record::*;
pub use title::*;
pub use value::*;
