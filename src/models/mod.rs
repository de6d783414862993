pub mod generator;
pub mod history;
pub mod question;
pub mod quiz_config;
pub mod scorer;
pub mod session;

pub use history::{Attempt, History};
pub use question::{default_dataset_path, Dataset, Mode, Question, Topic};
pub use quiz_config::{QuizConfig, DEFAULT_QUESTIONS, MAX_QUESTIONS, MIN_QUESTIONS};
pub use scorer::{grade, Classification, QuizReport};
pub use session::Session;
