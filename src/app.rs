use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Question, QuizState};

/// Result of answering one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

/// State of a single quiz run.
pub struct App {
    pub state: QuizState,
    questions: Vec<Question>,
    current_question_index: usize,
    score: usize,
}

impl App {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            state: QuizState::NotStarted,
            questions,
            current_question_index: 0,
            score: 0,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::Running => self.questions.get(self.current_question_index),
            _ => None,
        }
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Shuffle the question order for this run and start it.
    ///
    /// Option order inside each question is left as loaded. An empty
    /// question set ends the run immediately.
    pub fn start_quiz<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.state != QuizState::NotStarted {
            return;
        }

        if self.questions.is_empty() {
            self.state = QuizState::EmptyExit;
            return;
        }

        self.questions.shuffle(rng);
        self.current_question_index = 0;
        self.score = 0;
        self.state = QuizState::Running;
    }

    /// Score the chosen option of the current question and advance.
    ///
    /// Returns `None` when no question is being asked.
    pub fn submit_answer(&mut self, option_index: usize) -> Option<AnswerOutcome> {
        let question = self.current_question()?;
        let outcome = if question.is_correct(option_index) {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        };

        self.current_question_index += 1;
        if self.current_question_index >= self.questions.len() {
            self.state = QuizState::Finished;
        }

        Some(outcome)
    }
}
