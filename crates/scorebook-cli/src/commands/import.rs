use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use scorebook_core::{ScoreJson, UniqueScoreList, format_score_table, parse_score};
use serde_json::json;
use tracing::{info, warn};

use super::OutputOptions;

/// A line that could not be imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number
    pub line: usize,
    pub reason: String,
    /// Bad input rather than a duplicate of an earlier line
    pub invalid: bool,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub scores: UniqueScoreList,
    pub rejected: Vec<RejectedLine>,
}

impl ImportReport {
    pub fn invalid_count(&self) -> usize {
        self.rejected.iter().filter(|r| r.invalid).count()
    }

    pub fn duplicate_count(&self) -> usize {
        self.rejected.len() - self.invalid_count()
    }
}

/// Parse one score per line. Blank lines and `#` comments are skipped.
pub fn import_lines(content: &str) -> ImportReport {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut report = ImportReport::default();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let result = parse_score(line).and_then(|record| report.scores.add(record));
        if let Err(e) = result {
            warn!("Line {}: {}", index + 1, e);
            report.rejected.push(RejectedLine {
                line: index + 1,
                reason: e.to_string(),
                invalid: e.is_validation(),
            });
        }
    }

    report
}

pub fn run(path: &Path, output: OutputOptions) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let report = import_lines(&content);
    info!(
        "Imported {} scores, rejected {} invalid and {} duplicate lines",
        report.scores.len(),
        report.invalid_count(),
        report.duplicate_count()
    );

    let sorted = report.scores.sorted_by_date();

    if output.json {
        let value = json!({
            "scores": sorted.iter().map(|r| ScoreJson::from(*r)).collect::<Vec<_>>(),
            "rejected": report
                .rejected
                .iter()
                .map(|r| json!({ "line": r.line, "reason": r.reason, "invalid": r.invalid }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if !sorted.is_empty() {
        println!("{}", format_score_table(sorted));
    }
    for rejected in &report.rejected {
        eprintln!("line {}: {}", rejected.line, rejected.reason);
    }
    eprintln!(
        "{} scores imported, {} invalid lines, {} duplicates",
        report.scores.len(),
        report.invalid_count(),
        report.duplicate_count()
    );

    Ok(())
}
