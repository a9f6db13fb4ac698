//! # trivia-quiz
//!
//! A command-line multiple-choice quiz that reads its questions from a CSV
//! file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let mut rng = rand::rng();
//!
//!     // Load questions, printing a diagnostic if the file is unusable
//!     let quiz = Quiz::load("questions.csv", &mut std::io::stdout(), &mut rng)?;
//!
//!     // Ask every question on stdin/stdout
//!     if let Some(summary) = quiz.run(&mut rng)? {
//!         println!("{}", summary);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod input;
mod models;
pub mod terminal;
mod ui;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;

use log::info;
use rand::Rng;

pub use app::{AnswerOutcome, App};
pub use data::{LoadError, LoadOutcome, REQUIRED_COLUMNS, load_questions, load_questions_from_csv};
pub use input::read_answer;
pub use models::{Question, QuizState};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    Load(LoadError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// Final tally of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
}

impl fmt::Display for QuizSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Load a quiz from a CSV file without failing on bad data.
    ///
    /// If the file is missing or malformed the diagnostic is written to
    /// `out` and the quiz starts with no questions. Only a failure to write
    /// the diagnostic is returned as an error.
    pub fn load<P, W, R>(path: P, out: &mut W, rng: &mut R) -> Result<Self, QuizError>
    where
        P: AsRef<Path>,
        W: Write,
        R: Rng + ?Sized,
    {
        let outcome = load_questions(path, rng);
        outcome.report(out)?;
        Ok(Self::new(outcome.questions))
    }

    /// Load a quiz from a CSV file, returning any load error.
    pub fn from_csv<P: AsRef<Path>, R: Rng + ?Sized>(
        path: P,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let questions = load_questions_from_csv(path, rng)?;
        Ok(Self::new(questions))
    }

    /// Run the quiz on stdin and stdout.
    pub fn run<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Option<QuizSummary>, QuizError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(&mut stdin.lock(), &mut stdout.lock(), rng)
    }

    /// Run the quiz over any input and output.
    ///
    /// Returns `None` when there were no questions to ask.
    pub fn run_with<I, W, R>(
        mut self,
        input: &mut I,
        output: &mut W,
        rng: &mut R,
    ) -> Result<Option<QuizSummary>, QuizError>
    where
        I: BufRead,
        W: Write,
        R: Rng + ?Sized,
    {
        self.app.start_quiz(rng);
        if self.app.state == QuizState::EmptyExit {
            ui::render_no_questions(output)?;
            return Ok(None);
        }

        run_question_loop(&mut self.app, input, output)?;

        let summary = QuizSummary {
            score: self.app.score(),
            total: self.app.total_questions(),
        };
        ui::render_summary(output, summary.score, summary.total)?;
        output.flush()?;
        info!("quiz finished with score {}", summary);
        Ok(Some(summary))
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }
}

fn run_question_loop<I: BufRead, W: Write>(
    app: &mut App,
    input: &mut I,
    output: &mut W,
) -> Result<(), QuizError> {
    let total = app.total_questions();

    while let Some(question) = app.current_question() {
        let question = question.clone();
        ui::render_question(output, app.current_question_number(), total, &question)?;

        let choice = read_answer(input, output, question.num_options())?;
        if let Some(outcome) = app.submit_answer(choice) {
            ui::render_feedback(output, outcome, &question)?;
        }
    }

    Ok(())
}
