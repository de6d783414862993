use super::question::Question;
use super::quiz_config::QuizConfig;

// In-memory state of one quiz run: the drawn questions, the per-question
// selections, and the cursor. Discarded on abandon, consumed by finish().
pub struct Session {
    config: QuizConfig,
    questions: Vec<Question>,
    selections: Vec<Vec<String>>,
    current: usize,
}

impl Session {
    pub fn new(config: QuizConfig, questions: Vec<Question>) -> Self {
        let selections = vec![Vec::new(); questions.len()];
        Self {
            config,
            questions,
            selections,
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn selected(&self, index: usize) -> &[String] {
        &self.selections[index]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| !s.is_empty()).count()
    }

    // Single choice replaces the selection; multiple choice toggles the
    // option. Options that are not in the question's choice list are ignored.
    pub fn answer(&mut self, index: usize, option: &str) {
        let Some(question) = self.questions.get(index) else {
            return;
        };
        if !question.choices.iter().any(|c| c == option) {
            return;
        }

        let selection = &mut self.selections[index];
        if question.is_single() {
            selection.clear();
            selection.push(option.to_string());
        } else if let Some(pos) = selection.iter().position(|s| s == option) {
            selection.remove(pos);
        } else {
            selection.push(option.to_string());
        }
    }

    pub fn reset(&mut self, index: usize) {
        if let Some(selection) = self.selections.get_mut(index) {
            selection.clear();
        }
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    pub fn finish(self) -> (QuizConfig, Vec<Question>, Vec<Vec<String>>) {
        (self.config, self.questions, self.selections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::Mode;

    fn single(prompt: &str) -> Question {
        Question {
            question: prompt.to_string(),
            choices: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct: vec!["a".to_string()],
            mode: Mode::Single,
            tags: vec!["math".to_string()],
        }
    }

    fn multiple(prompt: &str) -> Question {
        Question {
            question: prompt.to_string(),
            choices: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct: vec!["a".to_string(), "b".to_string()],
            mode: Mode::Multiple,
            tags: vec!["math".to_string()],
        }
    }

    fn session() -> Session {
        let config = QuizConfig::new(vec!["math".to_string()], 5).unwrap();
        let questions = vec![
            single("q0"),
            multiple("q1"),
            single("q2"),
            single("q3"),
            single("q4"),
        ];
        Session::new(config, questions)
    }

    #[test]
    fn test_single_choice_replaces() {
        let mut s = session();
        s.answer(0, "a");
        s.answer(0, "b");
        assert_eq!(s.selected(0), ["b"]);
    }

    #[test]
    fn test_multiple_choice_toggles() {
        let mut s = session();
        s.answer(1, "a");
        s.answer(1, "b");
        assert_eq!(s.selected(1), ["a", "b"]);
        s.answer(1, "a");
        assert_eq!(s.selected(1), ["b"]);
    }

    #[test]
    fn test_unknown_option_ignored() {
        let mut s = session();
        s.answer(0, "z");
        assert!(s.selected(0).is_empty());
    }

    #[test]
    fn test_reset_clears_only_that_question() {
        let mut s = session();
        s.answer(0, "a");
        s.answer(2, "c");
        s.reset(0);
        assert!(s.selected(0).is_empty());
        assert_eq!(s.selected(2), ["c"]);

        // reset then answer yields the new selection
        s.answer(0, "b");
        assert_eq!(s.selected(0), ["b"]);
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut s = session();
        s.previous();
        assert_eq!(s.current_index(), 0);

        for _ in 0..10 {
            s.next();
        }
        assert_eq!(s.current_index(), 4);
        assert!(s.is_last());

        s.next();
        assert_eq!(s.current_index(), 4);
    }

    #[test]
    fn test_answered_count() {
        let mut s = session();
        assert_eq!(s.answered_count(), 0);
        s.answer(0, "a");
        s.answer(3, "b");
        assert_eq!(s.answered_count(), 2);
    }
}
