use crate::display::display_history_list;
use crate::models::History;

pub fn show_history() {
    let history = match History::open(History::default_path()) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Failed to read history: {}", e);
            std::process::exit(1);
        }
    };

    if history.is_empty() {
        println!("No quizzes in the history yet.");
        println!("Run `quizzle start -t <topic>` to take one.");
        return;
    }

    display_history_list(history.iter(), &history.summary());
}
