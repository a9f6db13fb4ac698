mod question;

pub use question::Question;

/// Lifecycle of one quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    /// Started with an empty question set; nothing is scored.
    EmptyExit,
    Running,
    Finished,
}
