use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::question::{Mode, Question};

// Questions without tags are grouped under this topic in the breakdown.
const GENERAL_TOPIC: &str = "general";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    CorrectSelected,
    CorrectMissed,
    IncorrectSelected,
    Unanswered,
}

impl Classification {
    pub fn display_name(&self) -> &'static str {
        match self {
            Classification::CorrectSelected => "correct",
            Classification::CorrectMissed => "partially correct",
            Classification::IncorrectSelected => "incorrect",
            Classification::Unanswered => "unanswered",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResult {
    pub prompt: String,
    pub mode: Mode,
    pub topics: Vec<String>,
    pub choices: Vec<String>,
    pub correct: Vec<String>,
    pub selected: Vec<String>,
    pub score: f64,
    pub classification: Classification,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicStats {
    pub topic: String,
    pub points: f64,
    pub total: usize,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    pub per_question: Vec<QuestionResult>,
    pub total_score: f64,
    pub topic_stats: Vec<TopicStats>,
}

// 1 point iff exactly one option is selected and it is a correct one.
pub fn score_single(correct: &[String], selected: &[String]) -> f64 {
    if correct.is_empty() {
        return 0.0;
    }
    if selected.len() == 1 && correct.contains(&selected[0]) {
        1.0
    } else {
        0.0
    }
}

// Proportional credit with a penalty for wrong picks:
// score = max(0, |correct ∩ selected|/|correct| - |selected \ correct|/|correct|)
pub fn score_multiple(correct: &[String], selected: &[String]) -> f64 {
    let correct_set: HashSet<&str> = correct.iter().map(String::as_str).collect();
    if correct_set.is_empty() {
        return 0.0;
    }
    let selected_set: HashSet<&str> = selected.iter().map(String::as_str).collect();

    let hits = correct_set.intersection(&selected_set).count() as f64;
    let misses = selected_set.difference(&correct_set).count() as f64;
    let denom = correct_set.len() as f64;

    (hits / denom - misses / denom).max(0.0)
}

pub fn score(question: &Question, selected: &[String]) -> f64 {
    match question.mode {
        Mode::Single => score_single(&question.correct, selected),
        Mode::Multiple => score_multiple(&question.correct, selected),
    }
}

// Every question lands in exactly one category.
pub fn classify(question: &Question, selected: &[String]) -> Classification {
    if selected.is_empty() {
        return Classification::Unanswered;
    }

    let correct_set: HashSet<&str> = question.correct.iter().map(String::as_str).collect();
    let selected_set: HashSet<&str> = selected.iter().map(String::as_str).collect();

    if selected_set.iter().any(|s| !correct_set.contains(s)) {
        Classification::IncorrectSelected
    } else if selected_set == correct_set {
        Classification::CorrectSelected
    } else {
        Classification::CorrectMissed
    }
}

pub fn grade(questions: &[Question], selections: &[Vec<String>]) -> QuizReport {
    let empty = Vec::new();
    let mut per_question = Vec::with_capacity(questions.len());
    let mut total_points = 0.0;
    let mut topic_points: BTreeMap<String, (f64, usize)> = BTreeMap::new();

    for (i, question) in questions.iter().enumerate() {
        let selected = selections.get(i).unwrap_or(&empty);
        let score = score(question, selected);
        total_points += score;

        let mut topics = question.topic_ids();
        if topics.is_empty() {
            topics.push(GENERAL_TOPIC.to_string());
        }
        for topic in &topics {
            let entry = topic_points.entry(topic.clone()).or_insert((0.0, 0));
            entry.0 += score;
            entry.1 += 1;
        }

        per_question.push(QuestionResult {
            prompt: question.question.clone(),
            mode: question.mode,
            topics,
            choices: question.choices.clone(),
            correct: question.correct.clone(),
            selected: selected.clone(),
            score,
            classification: classify(question, selected),
        });
    }

    let total_score = if questions.is_empty() {
        0.0
    } else {
        total_points / questions.len() as f64 * 100.0
    };

    let mut topic_stats: Vec<TopicStats> = topic_points
        .into_iter()
        .map(|(topic, (points, total))| TopicStats {
            topic,
            points,
            total,
            accuracy: points / total as f64 * 100.0,
        })
        .collect();
    topic_stats.sort_by(|a, b| b.accuracy.total_cmp(&a.accuracy));

    QuizReport {
        per_question,
        total_score,
        topic_stats,
    }
}

pub fn feedback(score_pct: f64) -> &'static str {
    if score_pct >= 90.0 {
        "Excellent!"
    } else if score_pct >= 75.0 {
        "Very good!"
    } else if score_pct >= 60.0 {
        "Good work"
    } else if score_pct >= 50.0 {
        "Not bad"
    } else if score_pct >= 40.0 {
        "Could do better"
    } else if score_pct >= 25.0 {
        "Keep at it"
    } else {
        "Needs review"
    }
}
