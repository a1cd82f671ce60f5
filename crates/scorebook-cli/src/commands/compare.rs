use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use anyhow::{Context, Result};
use scorebook_core::{ScoreJson, ScoreRecord, parse_score};
use serde_json::json;

use super::OutputOptions;

/// How two scores relate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub equal: bool,
    pub same_score: bool,
    pub same_hash: bool,
}

pub fn compare(left: &ScoreRecord, right: &ScoreRecord) -> Comparison {
    Comparison {
        equal: left == right,
        same_score: left.is_same_score(right),
        same_hash: hash_of(left) == hash_of(right),
    }
}

fn hash_of(record: &ScoreRecord) -> u64 {
    let mut hasher = DefaultHasher::new();
    record.hash(&mut hasher);
    hasher.finish()
}

pub fn run(left: &str, right: &str, output: OutputOptions) -> Result<()> {
    let left = parse_score(left).with_context(|| format!("Invalid first score: {:?}", left))?;
    let right = parse_score(right).with_context(|| format!("Invalid second score: {:?}", right))?;
    let result = compare(&left, &right);

    if output.json {
        let value = json!({
            "left": ScoreJson::from(&left),
            "right": ScoreJson::from(&right),
            "equal": result.equal,
            "same_score": result.same_score,
            "same_hash": result.same_hash,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", left);
        println!("{}", right);
        println!("{:>10}: {}", "Equal", result.equal);
        println!("{:>10}: {}", "Same score", result.same_score);
        println!("{:>10}: {}", "Same hash", result.same_hash);
    }

    Ok(())
}
