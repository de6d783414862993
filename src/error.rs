use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("no topics selected")]
    EmptyTopics,

    #[error("question count must be between {min} and {max}, got {got}")]
    CountOutOfRange { got: usize, min: usize, max: usize },

    #[error("no questions found for topic '{0}'")]
    UnknownTopic(String),

    #[error("only {available} question(s) match the selected topics, {requested} requested")]
    NotEnoughQuestions { available: usize, requested: usize },
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no question file found at {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("no attempt #{0} in history")]
    AttemptNotFound(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid json data: {0}")]
    Json(#[from] serde_json::Error),
}
