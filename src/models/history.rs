use std::fs;
use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

use super::quiz_config::QuizConfig;
use super::scorer::{QuestionResult, QuizReport, TopicStats};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub timestamp: String,
    pub topics: Vec<String>,
    pub question_count: usize,
    pub total_score: f64,
    pub per_question: Vec<QuestionResult>,
    pub topic_stats: Vec<TopicStats>,
}

impl Attempt {
    pub fn from_report(config: &QuizConfig, report: QuizReport) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339(),
            topics: config.topics().to_vec(),
            question_count: config.count(),
            total_score: report.total_score,
            per_question: report.per_question,
            topic_stats: report.topic_stats,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HistorySummary {
    pub completed: usize,
    pub average: f64,
    pub best: f64,
}

// Append-only log of attempts, stored as one pretty-printed json file.
// Attempts are addressed by their 1-based recording order.
pub struct History {
    path: PathBuf,
    attempts: Vec<Attempt>,
}

impl History {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().expect("Could not determine home directory");
        home.join(".config").join("quizzle").join("history.json")
    }

    pub fn open(path: PathBuf) -> Result<Self, QuizError> {
        if !path.exists() {
            return Ok(Self {
                path,
                attempts: Vec::new(),
            });
        }

        let contents = fs::read_to_string(&path)?;
        let attempts = serde_json::from_str(&contents)?;
        Ok(Self { path, attempts })
    }

    pub fn record(&mut self, attempt: Attempt) -> Result<(), QuizError> {
        self.attempts.push(attempt);
        self.save()
    }

    fn save(&self) -> Result<(), QuizError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.attempts)?;
        fs::write(&self.path, contents)?;
        log::debug!("saved {} attempt(s) to {}", self.attempts.len(), self.path.display());
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attempt> {
        self.attempts.iter()
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub fn detail(&self, id: usize) -> Result<&Attempt, QuizError> {
        id.checked_sub(1)
            .and_then(|i| self.attempts.get(i))
            .ok_or(QuizError::AttemptNotFound(id))
    }

    pub fn summary(&self) -> HistorySummary {
        let completed = self.attempts.len();
        if completed == 0 {
            return HistorySummary {
                completed: 0,
                average: 0.0,
                best: 0.0,
            };
        }

        let scores: Vec<f64> = self.attempts.iter().map(|a| a.total_score).collect();
        HistorySummary {
            completed,
            average: scores.iter().sum::<f64>() / completed as f64,
            best: scores.iter().cloned().fold(f64::MIN, f64::max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scorer::grade;
    use crate::models::question::{Mode, Question};

    fn temp_history_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("quizzle-test-{}-{}.json", name, std::process::id()))
    }

    fn attempt(score: f64) -> Attempt {
        let config = QuizConfig::new(vec!["math".to_string()], 5).unwrap();
        Attempt {
            timestamp: Local::now().to_rfc3339(),
            topics: config.topics().to_vec(),
            question_count: config.count(),
            total_score: score,
            per_question: Vec::new(),
            topic_stats: Vec::new(),
        }
    }

    #[test]
    fn test_record_preserves_order() {
        let path = temp_history_path("order");
        let _ = fs::remove_file(&path);

        let mut history = History::open(path.clone()).unwrap();
        history.record(attempt(40.0)).unwrap();
        history.record(attempt(80.0)).unwrap();
        history.record(attempt(60.0)).unwrap();

        let scores: Vec<f64> = history.iter().map(|a| a.total_score).collect();
        assert_eq!(scores, [40.0, 80.0, 60.0]);

        // the iterator restarts from the beginning each call
        let again: Vec<f64> = history.iter().map(|a| a.total_score).collect();
        assert_eq!(again, scores);

        // reloading from disk sees the same attempts
        let reloaded = History::open(path.clone()).unwrap();
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.detail(2).unwrap().total_score, 80.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_detail_bounds() {
        let path = temp_history_path("detail");
        let _ = fs::remove_file(&path);

        let mut history = History::open(path.clone()).unwrap();
        history.record(attempt(50.0)).unwrap();

        assert!(history.detail(1).is_ok());
        assert!(matches!(history.detail(0), Err(QuizError::AttemptNotFound(0))));
        assert!(matches!(history.detail(2), Err(QuizError::AttemptNotFound(2))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_summary() {
        let path = temp_history_path("summary");
        let _ = fs::remove_file(&path);

        let mut history = History::open(path.clone()).unwrap();
        let empty = history.summary();
        assert_eq!(empty.completed, 0);

        history.record(attempt(40.0)).unwrap();
        history.record(attempt(80.0)).unwrap();

        let summary = history.summary();
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.average, 60.0);
        assert_eq!(summary.best, 80.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_attempt_round_trip_through_report() {
        let question = Question {
            question: "2 + 2 = ?".to_string(),
            choices: vec!["3".to_string(), "4".to_string()],
            correct: vec!["4".to_string()],
            mode: Mode::Single,
            tags: vec!["math".to_string()],
        };
        let report = grade(&[question], &[vec!["4".to_string()]]);
        let config = QuizConfig::new(vec!["math".to_string()], 5).unwrap();
        let attempt = Attempt::from_report(&config, report);

        assert_eq!(attempt.total_score, 100.0);
        assert_eq!(attempt.question_count, 5);
        assert_eq!(attempt.topics, ["math"]);
        assert_eq!(attempt.per_question.len(), 1);
    }
}
