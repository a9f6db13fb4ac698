mod loader;

pub use loader::{LoadError, LoadOutcome, REQUIRED_COLUMNS, load_questions, load_questions_from_csv};
