/// A single multiple-choice question.
///
/// `options` is shuffled once when the question is loaded and keeps that
/// order for as long as the question lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct_answer: correct_answer.into(),
        }
    }

    pub fn num_options(&self) -> usize {
        self.options.len()
    }

    /// Exact text comparison of the chosen option against the correct answer.
    ///
    /// An out-of-range index is never correct.
    pub fn is_correct(&self, option_index: usize) -> bool {
        self.options
            .get(option_index)
            .is_some_and(|option| *option == self.correct_answer)
    }
}
