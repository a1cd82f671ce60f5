//! Output views of scores: console text and a JSON-serializable shape.

mod console;

pub use console::*;

use serde::Serialize;

use crate::score::{DATE_DISPLAY_FORMAT, ScoreRecord};

/// JSON view of a score for `--json` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreJson {
    pub name: String,
    pub value: u32,
    pub timestamp: String,
}

impl From<&ScoreRecord> for ScoreJson {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            name: record.name().to_string(),
            value: record.value().get(),
            timestamp: record.timestamp().format(DATE_DISPLAY_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{ScoreValue, Title};

    #[test]
    fn test_score_json() {
        let record = ScoreRecord::new(
            Title::new("Midterm").unwrap(),
            ScoreValue::new(85).unwrap(),
            "2024-03-15 14:30",
        )
        .unwrap();

        let json = serde_json::to_value(ScoreJson::from(&record)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Midterm",
                "value": 85,
                "timestamp": "2024-03-15T14:30"
            })
        );
    }
}
