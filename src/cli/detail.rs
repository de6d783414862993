use crate::display::display_attempt_detail;
use crate::models::History;

pub fn show_detail(id: usize) {
    let history = match History::open(History::default_path()) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Failed to read history: {}", e);
            std::process::exit(1);
        }
    };

    match history.detail(id) {
        Ok(attempt) => display_attempt_detail(id, attempt),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
