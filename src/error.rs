use crate::selection::{Position, Side};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourtsideError {
    #[error("Could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster file is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Malformed roster row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Player already selected in another position! ('{name}' is already at {taken} for {side})")]
    DuplicateSelection {
        side: Side,
        name: String,
        taken: Position,
    },

    #[error("{side} has {selected} of 5 positions filled")]
    IncompleteLineup { side: Side, selected: usize },

    #[error("Player '{0}' not found in roster")]
    PlayerNotFound(String),

    #[error("Player '{name}' matches {matches} roster rows")]
    AmbiguousPlayer { name: String, matches: usize },

    #[error("Matchup grade is undefined when the raw difference is exactly -1")]
    DegenerateGrade,

    #[error("No defense image exists for bucket {0}")]
    NoDefenseImage(i32),

    #[error("An error occurred while opening the images: {0}")]
    ImageLoad(String),
}

pub type CsResult<T> = Result<T, CourtsideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_input() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "team-first.txt");
        assert_eq!(
            CourtsideError::from(missing).to_string(),
            "Could not read file: team-first.txt"
        );
        assert_eq!(
            CourtsideError::Validation("Duplicate player 'Ann' in roster".into()).to_string(),
            "Validation failed: Duplicate player 'Ann' in roster"
        );
        assert_eq!(
            CourtsideError::Config("Too many players".into()).to_string(),
            "Invalid configuration: Too many players"
        );
    }
}
