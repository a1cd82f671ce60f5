//! Console output formatting with optional colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::score::{DATE_DISPLAY_FORMAT, ScoreRecord, ScoreValue};

/// Format a score as an aligned key/value block
pub fn format_score_console(record: &ScoreRecord, color: bool) -> String {
    let date = record.timestamp().format(DATE_DISPLAY_FORMAT).to_string();
    let value = record.value();

    let (name, value, date) = if color {
        (
            record.name().bold().to_string(),
            format_colored_value(value),
            date.dimmed().to_string(),
        )
    } else {
        (record.name().to_string(), value.to_string(), date)
    };

    let mut output = String::new();
    let _ = writeln!(output, "{:>7}: {}", "Name", name);
    let _ = writeln!(output, "{:>7}: {}", "Score", value);
    let _ = write!(output, "{:>7}: {}", "Date", date);
    output
}

/// Color a value by band: top quarter green, bottom half red
fn format_colored_value(value: ScoreValue) -> String {
    let v = value.get();
    if v * 4 >= ScoreValue::MAX * 3 {
        v.green().to_string()
    } else if v * 2 >= ScoreValue::MAX {
        v.yellow().to_string()
    } else {
        v.red().to_string()
    }
}

/// One numbered `Display` line per score
pub fn format_score_table<'a>(records: impl IntoIterator<Item = &'a ScoreRecord>) -> String {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| format!("{:>3}. {}", i + 1, record))
        .collect::<Vec<_>>()
        .join("\n")
}
