use std::collections::HashMap;

use strum::IntoEnumIterator;
use tracing::debug;

use crate::command::Prefix;
use crate::error::{Error, Result};
use crate::score::{ScoreRecord, ScoreValue, Title};

/// Prefixed arguments split out of a command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: HashMap<Prefix, String>,
}

impl ArgumentMap {
    /// Text before the first prefix, trimmed
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Trimmed value of the last occurrence of `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values.get(&prefix).map(|s| s.as_str())
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }
}

/// Split `input` on recognised prefixes.
///
/// A prefix only counts at the start of the input or after a space, so
/// `n/` inside a value does not start a new argument unless it follows
/// whitespace. Each value runs up to the next prefix.
pub fn tokenize(input: &str) -> ArgumentMap {
    let padded = format!(" {}", input);

    let mut marks: Vec<(usize, Prefix, usize)> = Vec::new();
    for prefix in Prefix::iter() {
        let needle = format!(" {}", prefix.as_str());
        marks.extend(
            padded
                .match_indices(needle.as_str())
                .map(|(pos, _)| (pos, prefix, needle.len())),
        );
    }
    marks.sort_by_key(|(pos, _, _)| *pos);

    let preamble_end = marks.first().map(|(pos, _, _)| *pos).unwrap_or(padded.len());
    let mut map = ArgumentMap {
        preamble: padded[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix, len)) in marks.iter().enumerate() {
        let start = pos + len;
        let end = marks
            .get(i + 1)
            .map(|(next, _, _)| *next)
            .unwrap_or(padded.len());
        map.values
            .insert(*prefix, padded[start..end].trim().to_string());
    }

    map
}

/// Parse a score from prefix form: `n/<title> v/<value> d/<yyyy-MM-dd HH:mm>`
pub fn parse_score(input: &str) -> Result<ScoreRecord> {
    let args = tokenize(input);
    debug!("Parsed score arguments: {:?}", args);

    if !args.preamble().is_empty() {
        return Err(Error::UnknownPrefix(args.preamble().to_string()));
    }

    let name = args.value(Prefix::Name).map(Title::new).transpose()?;
    let value = args
        .value(Prefix::Value)
        .map(|text| text.parse::<ScoreValue>())
        .transpose()?;

    ScoreRecord::from_fields(name, value, args.value(Prefix::Date))
}
