use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

use crate::error::{Error, Result};
use crate::score::{ScoreValue, Title};

/// Accepted input pattern for score dates
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Rendering pattern for score dates (ISO-8601 local date-time, minute precision)
pub const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Byte layout of `yyyy-MM-dd HH:mm`: `d` = ASCII digit, anything else is a literal
const DATE_SHAPE: &[u8; 16] = b"dddd-dd-dd dd:dd";

/// A named, dated score
///
/// Immutable once built; every instance holds a valid title, value and
/// calendar date-time. To change a score, build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreRecord {
    name: Title,
    value: ScoreValue,
    timestamp: NaiveDateTime,
}

impl ScoreRecord {
    /// Build a score from a validated title and value plus date text in
    /// `yyyy-MM-dd HH:mm` form.
    ///
    /// Fails with [`Error::BadDate`] if the text does not match that exact
    /// pattern or names a date that does not exist.
    pub fn new(name: Title, value: ScoreValue, date_text: &str) -> Result<Self> {
        let timestamp = parse_score_date(date_text)?;
        Ok(Self {
            name,
            value,
            timestamp,
        })
    }

    /// Build a score from inputs that may be missing.
    ///
    /// All three inputs are checked for presence before the date is parsed,
    /// so a missing field is reported as [`Error::NullArgument`] even when
    /// the date text is also malformed.
    pub fn from_fields(
        name: Option<Title>,
        value: Option<ScoreValue>,
        date_text: Option<&str>,
    ) -> Result<Self> {
        let (name, value, date_text) = match (name, value, date_text) {
            (Some(name), Some(value), Some(date_text)) => (name, value, date_text),
            (None, _, _) => return Err(Error::null_argument("name")),
            (_, None, _) => return Err(Error::null_argument("value")),
            (_, _, None) => return Err(Error::null_argument("date")),
        };
        Self::new(name, value, date_text)
    }

    pub fn name(&self) -> &Title {
        &self.name
    }

    pub fn value(&self) -> ScoreValue {
        self.value
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Check whether `other` describes the same score.
    ///
    /// Used by collections to detect duplicates. Currently compares the same
    /// fields as `==`.
    pub fn is_same_score(&self, other: &ScoreRecord) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        other.name == self.name && other.value == self.value && other.timestamp == self.timestamp
    }
}

impl std::fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}; Score: {}; Date: {}",
            self.name,
            self.value,
            self.timestamp.format(DATE_DISPLAY_FORMAT)
        )
    }
}

/// Parse date text in exactly `yyyy-MM-dd HH:mm` form.
///
/// chrono alone accepts single-digit fields and extra whitespace, so the
/// byte shape is checked first. Years start at 1; `0000` is rejected.
pub fn parse_score_date(text: &str) -> Result<NaiveDateTime> {
    if !matches_date_shape(text) {
        debug!("Rejected date text {:?}: wrong shape", text);
        return Err(Error::BadDate(text.to_string()));
    }

    let timestamp = NaiveDateTime::parse_from_str(text, DATE_INPUT_FORMAT).map_err(|e| {
        debug!("Rejected date text {:?}: {}", text, e);
        Error::BadDate(text.to_string())
    })?;

    if timestamp.year() < 1 {
        debug!("Rejected date text {:?}: year before 1", text);
        return Err(Error::BadDate(text.to_string()));
    }

    Ok(timestamp)
}

fn matches_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == DATE_SHAPE.len()
        && bytes
            .iter()
            .zip(DATE_SHAPE.iter())
            .all(|(&b, &shape)| match shape {
                b'd' => b.is_ascii_digit(),
                literal => b == literal,
            })
}
