use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Single,
    Multiple,
}

impl Mode {
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Single => "single choice",
            Mode::Multiple => "multiple choice",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub choices: Vec<String>,
    pub correct: Vec<String>,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Question {
    pub fn is_single(&self) -> bool {
        self.mode == Mode::Single
    }

    pub fn topic_ids(&self) -> Vec<String> {
        self.tags.iter().map(|t| Topic::from_tag(t).id).collect()
    }
}

// A topic is derived from the free-form tags on questions: the id is a
// normalized slug, the name keeps the dataset's spelling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Topic {
    pub id: String,
    pub name: String,
}

impl Topic {
    pub fn from_tag(tag: &str) -> Self {
        let name = tag.trim().to_string();
        let id = name.to_lowercase().replace(' ', "_");
        Topic { id, name }
    }
}

pub struct Dataset {
    pub questions: Vec<Question>,
}

pub fn default_dataset_path() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("quizzle").join("questions.json")
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, QuizError> {
        if !path.exists() {
            return Err(QuizError::DatasetNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let questions: Vec<Question> = serde_json::from_str(&contents)?;
        log::debug!("loaded {} questions from {}", questions.len(), path.display());

        Ok(Self { questions })
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn all_topics(&self) -> Vec<Topic> {
        let mut topics = BTreeSet::new();
        for q in &self.questions {
            for tag in &q.tags {
                topics.insert(Topic::from_tag(tag));
            }
        }
        topics.into_iter().collect()
    }

    pub fn topic_counts(&self) -> Vec<(Topic, usize)> {
        self.all_topics()
            .into_iter()
            .map(|topic| {
                let count = self
                    .questions
                    .iter()
                    .filter(|q| q.topic_ids().contains(&topic.id))
                    .count();
                (topic, count)
            })
            .collect()
    }

    pub fn by_topics(&self, ids: &[String]) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.topic_ids().iter().any(|id| ids.contains(id)))
            .cloned()
            .collect()
    }
}
