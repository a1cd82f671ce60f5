pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod score;

pub use command::{ArgumentMap, Prefix, parse_score, tokenize};
pub use config::{Config, DisplayConfig};
pub use error::{Error, Result};
pub use export::{ScoreJson, format_score_console, format_score_table};
pub use score::{ScoreRecord, ScoreValue, Title, UniqueScoreList, parse_score_date};
