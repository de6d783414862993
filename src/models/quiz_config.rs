use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::question::Topic;

pub const MIN_QUESTIONS: usize = 5;
pub const MAX_QUESTIONS: usize = 20;
pub const DEFAULT_QUESTIONS: usize = 10;

// Fields stay private so a config cannot change once the quiz has started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    topics: Vec<String>,
    count: usize,
}

impl QuizConfig {
    pub fn new(topics: Vec<String>, count: usize) -> Result<Self, ValidationError> {
        let mut ids: Vec<String> = topics
            .iter()
            .map(|t| Topic::from_tag(t).id)
            .filter(|id| !id.is_empty())
            .collect();
        ids.sort();
        ids.dedup();

        if ids.is_empty() {
            return Err(ValidationError::EmptyTopics);
        }

        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) {
            return Err(ValidationError::CountOutOfRange {
                got: count,
                min: MIN_QUESTIONS,
                max: MAX_QUESTIONS,
            });
        }

        Ok(Self { topics: ids, count })
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = QuizConfig::new(vec!["Math".to_string(), "math".to_string()], 10).unwrap();
        assert_eq!(config.topics(), ["math"]);
        assert_eq!(config.count(), 10);
    }

    #[test]
    fn test_empty_topics_rejected() {
        let err = QuizConfig::new(vec![], 10).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyTopics));

        // whitespace-only tags normalize away
        let err = QuizConfig::new(vec!["   ".to_string()], 10).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyTopics));
    }

    #[test]
    fn test_count_bounds() {
        assert!(QuizConfig::new(vec!["math".to_string()], MIN_QUESTIONS).is_ok());
        assert!(QuizConfig::new(vec!["math".to_string()], MAX_QUESTIONS).is_ok());

        let err = QuizConfig::new(vec!["math".to_string()], 4).unwrap_err();
        assert!(matches!(err, ValidationError::CountOutOfRange { got: 4, .. }));

        let err = QuizConfig::new(vec!["math".to_string()], 21).unwrap_err();
        assert!(matches!(err, ValidationError::CountOutOfRange { got: 21, .. }));
    }
}
