use anyhow::{Context, Result};
use scorebook_core::{ScoreJson, format_score_console, parse_score};
use tracing::debug;

use super::OutputOptions;

pub fn run(input: &str, output: OutputOptions) -> Result<()> {
    let record = parse_score(input).with_context(|| format!("Invalid score: {:?}", input))?;
    debug!("Accepted score: {}", record);

    if output.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ScoreJson::from(&record))?
        );
    } else {
        println!("{}", format_score_console(&record, output.color));
    }

    Ok(())
}
