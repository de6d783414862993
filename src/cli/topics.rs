use std::path::PathBuf;

use crate::display::display_topics;
use crate::models::{default_dataset_path, Dataset};

pub fn list_topics(file: Option<PathBuf>) {
    let path = file.unwrap_or_else(default_dataset_path);

    let dataset = match Dataset::load(&path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    display_topics(&dataset.topic_counts());
}
