use crate::models::history::{Attempt, HistorySummary};
use crate::models::question::{Question, Topic};
use crate::models::scorer::{feedback, QuestionResult, QuizReport};

const BANNER_WIDTH: usize = 60;
const PROGRESS_WIDTH: usize = 20;

// Option markers in the answer review:
// [+] correct and picked, [o] correct but missed, [x] wrong pick, [ ] untouched.
const MARKER_HIT: &str = "[+]";
const MARKER_MISSED: &str = "[o]";
const MARKER_WRONG: &str = "[x]";
const MARKER_NONE: &str = "[ ]";

pub fn display_question(question: &Question, index: usize, total: usize, selected: &[String]) {
    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("  Question {} of {} ({})", index + 1, total, question.mode.display_name());
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("\n{}\n", question.question);

    for (i, choice) in question.choices.iter().enumerate() {
        let marker = if selected.iter().any(|s| s == choice) {
            "[*]"
        } else {
            "[ ]"
        };
        println!("  {} {}. {}", marker, i + 1, choice);
    }

    println!("\n{} {}/{}", progress_bar(index + 1, total), index + 1, total);
    println!("Commands: <number> select, n next, p previous, r reset, f finish, q quit");
}

fn progress_bar(current: usize, total: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        current * PROGRESS_WIDTH / total
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(PROGRESS_WIDTH - filled))
}

pub fn display_results(report: &QuizReport) {
    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("  QUIZ COMPLETE");
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();
    println!("  Score: {:.1}% - {}", report.total_score, feedback(report.total_score));
    println!();

    println!("  Per-topic breakdown:");
    for stats in &report.topic_stats {
        println!(
            "    {:<20} {:.1}/{} ({:.0}%) - {}",
            stats.topic,
            stats.points,
            stats.total,
            stats.accuracy,
            feedback(stats.accuracy)
        );
    }

    println!("\n{}", "-".repeat(BANNER_WIDTH));
    println!("  Answer review");
    println!("  {} correct pick  {} missed answer  {} wrong pick", MARKER_HIT, MARKER_MISSED, MARKER_WRONG);
    println!("{}", "-".repeat(BANNER_WIDTH));

    for (i, result) in report.per_question.iter().enumerate() {
        display_question_review(i, result);
    }
}

pub fn display_question_review(index: usize, result: &QuestionResult) {
    println!(
        "\n  Question {}: {} ({:.0}%)",
        index + 1,
        result.classification.display_name(),
        result.score * 100.0
    );
    println!("  {}", result.prompt);

    for choice in &result.choices {
        let is_correct = result.correct.iter().any(|c| c == choice);
        let is_selected = result.selected.iter().any(|s| s == choice);
        let marker = match (is_correct, is_selected) {
            (true, true) => MARKER_HIT,
            (true, false) => MARKER_MISSED,
            (false, true) => MARKER_WRONG,
            (false, false) => MARKER_NONE,
        };
        println!("    {} {}", marker, choice);
    }
}

pub fn display_topics(counts: &[(Topic, usize)]) {
    if counts.is_empty() {
        println!("No topics found in the question file.");
        return;
    }

    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("  Available topics");
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();
    for (topic, count) in counts {
        println!("  {:<24} {} question(s)", topic.name, count);
    }
    println!();
    println!("Start a quiz with: quizzle start -t <topic>[,<topic>...]");
}

pub fn display_history_list<'a>(
    attempts: impl Iterator<Item = &'a Attempt>,
    summary: &HistorySummary,
) {
    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("  Quiz history");
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();

    for (i, attempt) in attempts.enumerate() {
        println!(
            "  #{:<3} {:<28} {:>5.1}%  {} questions  [{}]",
            i + 1,
            short_timestamp(&attempt.timestamp),
            attempt.total_score,
            attempt.question_count,
            attempt.topics.join(", ")
        );
    }

    println!();
    println!(
        "Completed: {} | Average: {:.1}% | Best: {:.1}%",
        summary.completed, summary.average, summary.best
    );
    println!("Run `quizzle detail <id>` for the full breakdown of one attempt.");
}

pub fn display_attempt_detail(id: usize, attempt: &Attempt) {
    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("  Attempt #{} - {}", id, short_timestamp(&attempt.timestamp));
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();
    println!("  Topics: {}", attempt.topics.join(", "));
    println!("  Questions: {}", attempt.question_count);
    println!(
        "  Score: {:.1}% - {}",
        attempt.total_score,
        feedback(attempt.total_score)
    );
    println!();

    println!("  Per-topic breakdown:");
    for stats in &attempt.topic_stats {
        println!(
            "    {:<20} {:.1}/{} ({:.0}%)",
            stats.topic, stats.points, stats.total, stats.accuracy
        );
    }

    println!("\n{}", "-".repeat(BANNER_WIDTH));
    println!("  Answer review");
    println!("  {} correct pick  {} missed answer  {} wrong pick", MARKER_HIT, MARKER_MISSED, MARKER_WRONG);
    println!("{}", "-".repeat(BANNER_WIDTH));

    for (i, result) in attempt.per_question.iter().enumerate() {
        display_question_review(i, result);
    }
    println!();
}

// Stored timestamps are rfc3339; keep the date and minute for listings.
fn short_timestamp(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
