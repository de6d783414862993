use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::display;
use crate::models::{
    default_dataset_path, generator, grade, Attempt, Dataset, History, QuizConfig, Session,
};

pub fn start_quiz(topics: Vec<String>, count: usize, shuffle: bool, file: Option<PathBuf>) {
    let config = match QuizConfig::new(topics, count) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let path = file.unwrap_or_else(default_dataset_path);
    let dataset = match Dataset::load(&path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let questions = match generator::draw(&dataset, &config, shuffle) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut session = Session::new(config, questions);
    let stdin = io::stdin();
    if !run_session(&mut session, &mut stdin.lock()) {
        println!("Quiz abandoned, nothing recorded.");
        return;
    }

    let (config, questions, selections) = session.finish();
    let report = grade(&questions, &selections);
    display::display_results(&report);

    let attempt = Attempt::from_report(&config, report);
    let mut history = match History::open(History::default_path()) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Failed to read history: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = history.record(attempt) {
        eprintln!("Failed to record attempt: {}", e);
        std::process::exit(1);
    }

    println!();
    println!("Recorded as attempt #{}", history.len());
}

// Drives one interactive session over stdin. Returns false if the user quit
// without finishing.
fn run_session(session: &mut Session, input: &mut impl BufRead) -> bool {
    loop {
        let index = session.current_index();
        display::display_question(
            session.current_question(),
            index,
            session.len(),
            session.selected(index),
        );

        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {}
        }

        match line.trim() {
            "q" => return false,
            "f" => {
                let unanswered = session.len() - session.answered_count();
                if unanswered > 0 {
                    println!("{} question(s) left unanswered.", unanswered);
                }
                return true;
            }
            "p" => session.previous(),
            "r" => session.reset(index),
            "" | "n" => {
                if session.is_last() {
                    println!("Last question - type f to finish or p to go back.");
                } else {
                    session.next();
                }
            }
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 && n <= session.current_question().choices.len() => {
                    let option = session.current_question().choices[n - 1].clone();
                    session.answer(index, &option);
                }
                Ok(n) => println!("No option {} on this question.", n),
                Err(_) => println!("Unrecognized command '{}'.", other),
            },
        }
    }
}
