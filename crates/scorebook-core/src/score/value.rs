use std::str::FromStr;

use crate::error::{Error, Result};

/// Numeric result of a score, bounded to `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ScoreValue(u32);

impl ScoreValue {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidScoreValue(value.to_string()))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl FromStr for ScoreValue {
    type Err = Error;

    /// Accepts plain decimal digits only (no sign, no fraction).
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidScoreValue(s.to_string()));
        }
        let value: u32 = s
            .parse()
            .map_err(|_| Error::InvalidScoreValue(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<u32> for ScoreValue {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ScoreValue> for u32 {
    fn from(value: ScoreValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_value_bounds() {
        assert_eq!(ScoreValue::new(0).unwrap().get(), 0);
        assert_eq!(ScoreValue::new(100).unwrap().get(), 100);
        assert!(ScoreValue::new(101).is_err());
    }

    #[test]
    fn test_score_value_from_str() {
        assert_eq!("85".parse::<ScoreValue>().unwrap().get(), 85);
        assert_eq!("007".parse::<ScoreValue>().unwrap().get(), 7);
        assert!("".parse::<ScoreValue>().is_err());
        assert!("-1".parse::<ScoreValue>().is_err());
        assert!("+5".parse::<ScoreValue>().is_err());
        assert!("85.5".parse::<ScoreValue>().is_err());
        assert!("abc".parse::<ScoreValue>().is_err());
        assert!("99999999999".parse::<ScoreValue>().is_err());
    }

    #[test]
    fn test_score_value_ordering() {
        let low = ScoreValue::new(40).unwrap();
        let high = ScoreValue::new(90).unwrap();
        assert!(low < high);
    }

    #[test]
    fn test_score_value_display() {
        assert_eq!(ScoreValue::new(85).unwrap().to_string(), "85");
    }
}
