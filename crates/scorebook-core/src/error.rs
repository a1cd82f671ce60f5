use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required field: {field}")]
    NullArgument { field: &'static str },

    #[error("Invalid date: {0:?} (expected yyyy-MM-dd HH:mm)")]
    BadDate(String),

    #[error("Invalid title: {0:?}")]
    InvalidTitle(String),

    #[error("Invalid score value: {0:?}")]
    InvalidScoreValue(String),

    #[error("Duplicate score: {0}")]
    DuplicateScore(String),

    #[error("Score not found: {0}")]
    ScoreNotFound(String),

    #[error("Unknown prefix or stray text: {0:?}")]
    UnknownPrefix(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn null_argument(field: &'static str) -> Self {
        Self::NullArgument { field }
    }

    /// True for the errors a caller should report as bad user input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NullArgument { .. }
                | Self::BadDate(_)
                | Self::InvalidTitle(_)
                | Self::InvalidScoreValue(_)
                | Self::UnknownPrefix(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
