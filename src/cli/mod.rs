mod detail;
mod history_cmd;
mod start;
mod topics;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{History, DEFAULT_QUESTIONS, MAX_QUESTIONS, MIN_QUESTIONS};

#[derive(Parser)]
#[command(name = "quizzle")]
#[command(about = "Topic-based quizzes in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Topics {
        /// Question file (defaults to ~/.config/quizzle/questions.json)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    Start {
        /// Topics to draw questions from (comma separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        topics: Vec<String>,

        /// Number of questions
        #[arg(short = 'n', long, default_value_t = DEFAULT_QUESTIONS)]
        count: usize,

        /// Keep the questions in file order instead of shuffling
        #[arg(long)]
        no_shuffle: bool,

        /// Question file (defaults to ~/.config/quizzle/questions.json)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    History,
    Detail {
        /// Attempt number as shown by `quizzle history`
        id: usize,
    },
}

pub fn run(cli: Cli) {
    match cli.command {
        None => generic_info(),
        Some(Commands::Topics { file }) => topics::list_topics(file),
        Some(Commands::Start {
            topics,
            count,
            no_shuffle,
            file,
        }) => start::start_quiz(topics, count, !no_shuffle, file),
        Some(Commands::History) => history_cmd::show_history(),
        Some(Commands::Detail { id }) => detail::show_detail(id),
    }
}

fn generic_info() {
    let history = match History::open(History::default_path()) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Failed to read history: {}", e);
            std::process::exit(1);
        }
    };

    let summary = history.summary();
    if summary.completed == 0 {
        println!("No quizzes completed yet.");
    } else {
        println!("Quizzes completed: {}", summary.completed);
        println!("Average score: {:.1}%", summary.average);
        println!("Best score: {:.1}%", summary.best);
    }

    println!();
    println!("Run `quizzle topics` to see what's available");
    println!(
        "Run `quizzle start -t <topic> -n <{}-{}>` to take a quiz",
        MIN_QUESTIONS, MAX_QUESTIONS
    );
    println!("Run `quizzle history` to review past attempts");
}
