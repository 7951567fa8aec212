/// A two-line multiple choice prompt: the prompt on the first row,
/// `selector + answer` on the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    answers: Vec<String>,
    selector: String,
    selected: usize,
}

impl Question {
    /// `answers` must not be empty.
    pub fn new(
        prompt: impl Into<String>,
        answers: Vec<String>,
        selector: impl Into<String>,
    ) -> Self {
        debug_assert!(!answers.is_empty(), "a question needs at least one answer");
        Self {
            prompt: prompt.into(),
            answers,
            selector: selector.into(),
            selected: 0,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn answer(&self) -> &str {
        self.answers
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn next(&mut self) {
        if !self.answers.is_empty() {
            self.selected = (self.selected + 1) % self.answers.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.answers.is_empty() {
            self.selected = (self.selected + self.answers.len() - 1) % self.answers.len();
        }
    }

    pub fn answer_line(&self) -> String {
        format!("{}{}", self.selector, self.answer())
    }
}
