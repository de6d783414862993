use rand::seq::SliceRandom;

use crate::error::ValidationError;

use super::question::{Dataset, Question};
use super::quiz_config::QuizConfig;

// Draws the session's question list from the dataset. Every selected topic
// must match at least one question, and the pool must cover the configured
// count: an attempt always holds exactly `config.count()` questions.
pub fn draw(
    dataset: &Dataset,
    config: &QuizConfig,
    shuffle: bool,
) -> Result<Vec<Question>, ValidationError> {
    for id in config.topics() {
        let known = dataset
            .questions
            .iter()
            .any(|q| q.topic_ids().contains(id));
        if !known {
            return Err(ValidationError::UnknownTopic(id.clone()));
        }
    }

    let mut pool = dataset.by_topics(config.topics());
    if pool.len() < config.count() {
        return Err(ValidationError::NotEnoughQuestions {
            available: pool.len(),
            requested: config.count(),
        });
    }

    if shuffle {
        pool.shuffle(&mut rand::thread_rng());
    }
    pool.truncate(config.count());

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::Mode;

    fn question(prompt: &str, tag: &str) -> Question {
        Question {
            question: prompt.to_string(),
            choices: vec!["a".to_string(), "b".to_string()],
            correct: vec!["a".to_string()],
            mode: Mode::Single,
            tags: vec![tag.to_string()],
        }
    }

    fn dataset() -> Dataset {
        let questions = (0..8)
            .map(|i| question(&format!("math {}", i), "math"))
            .chain((0..3).map(|i| question(&format!("logic {}", i), "logic")))
            .collect();
        Dataset::from_questions(questions)
    }

    #[test]
    fn test_draw_exact_count() {
        let config = QuizConfig::new(vec!["math".to_string()], 5).unwrap();
        let drawn = draw(&dataset(), &config, true).unwrap();
        assert_eq!(drawn.len(), 5);
        assert!(drawn.iter().all(|q| q.topic_ids().contains(&"math".to_string())));
    }

    #[test]
    fn test_draw_without_shuffle_keeps_order() {
        let config = QuizConfig::new(vec!["math".to_string()], 5).unwrap();
        let drawn = draw(&dataset(), &config, false).unwrap();
        let prompts: Vec<&str> = drawn.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(prompts, ["math 0", "math 1", "math 2", "math 3", "math 4"]);
    }

    #[test]
    fn test_unknown_topic_rejected() {
        let config = QuizConfig::new(vec!["history".to_string()], 5).unwrap();
        let err = draw(&dataset(), &config, true).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownTopic(id) if id == "history"));
    }

    #[test]
    fn test_small_pool_rejected() {
        let config = QuizConfig::new(vec!["logic".to_string()], 5).unwrap();
        let err = draw(&dataset(), &config, true).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotEnoughQuestions {
                available: 3,
                requested: 5
            }
        ));
    }
}
