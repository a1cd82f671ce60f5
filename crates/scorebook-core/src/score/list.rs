use crate::error::{Error, Result};
use crate::score::ScoreRecord;

/// List of scores with no two entries describing the same score
///
/// Sameness is decided by [`ScoreRecord::is_same_score`]. Insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueScoreList {
    scores: Vec<ScoreRecord>,
}

impl UniqueScoreList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, record: &ScoreRecord) -> bool {
        self.scores.iter().any(|s| s.is_same_score(record))
    }

    pub fn add(&mut self, record: ScoreRecord) -> Result<()> {
        if self.contains(&record) {
            return Err(Error::DuplicateScore(record.to_string()));
        }
        self.scores.push(record);
        Ok(())
    }

    /// Replace `target` with `edited` in place.
    ///
    /// `edited` may be the same score as `target`, but must not duplicate any other entry.
    pub fn set_score(&mut self, target: &ScoreRecord, edited: ScoreRecord) -> Result<()> {
        let index = self
            .position(target)
            .ok_or_else(|| Error::ScoreNotFound(target.to_string()))?;

        let collides = self
            .scores
            .iter()
            .enumerate()
            .any(|(i, s)| i != index && s.is_same_score(&edited));
        if collides {
            return Err(Error::DuplicateScore(edited.to_string()));
        }

        self.scores[index] = edited;
        Ok(())
    }

    pub fn remove(&mut self, record: &ScoreRecord) -> Result<ScoreRecord> {
        let index = self
            .position(record)
            .ok_or_else(|| Error::ScoreNotFound(record.to_string()))?;
        Ok(self.scores.remove(index))
    }

    /// Replace the whole contents. Leaves the list untouched on error.
    pub fn set_scores(&mut self, records: Vec<ScoreRecord>) -> Result<()> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.is_same_score(record)) {
                return Err(Error::DuplicateScore(record.to_string()));
            }
        }
        self.scores = records;
        Ok(())
    }

    /// Scores ordered by timestamp, ties broken by name
    pub fn sorted_by_date(&self) -> Vec<&ScoreRecord> {
        let mut sorted: Vec<&ScoreRecord> = self.scores.iter().collect();
        sorted.sort_by(|a, b| {
            a.timestamp()
                .cmp(&b.timestamp())
                .then_with(|| a.name().cmp(b.name()))
        });
        sorted
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.scores.iter()
    }

    pub fn as_slice(&self) -> &[ScoreRecord] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    fn position(&self, record: &ScoreRecord) -> Option<usize> {
        self.scores.iter().position(|s| s.is_same_score(record))
    }
}

impl<'a> IntoIterator for &'a UniqueScoreList {
    type Item = &'a ScoreRecord;
    type IntoIter = std::slice::Iter<'a, ScoreRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}
