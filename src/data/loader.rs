use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::models::Question;

/// Columns every question bank must provide, in any order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "question",
    "correct_answer",
    "incorrect_answer_1",
    "incorrect_answer_2",
    "incorrect_answer_3",
];

const PROMPT_PLACEHOLDER: &str = "Question not available";

/// Error loading a question bank.
#[derive(Debug)]
pub enum LoadError {
    /// The file does not exist.
    NotFound(PathBuf),
    /// The header row lacks one or more required columns.
    MissingColumns(Vec<&'static str>),
    /// The file could not be opened or read.
    Io(io::Error),
    /// The CSV data could not be parsed.
    Csv(csv::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(_) => write!(
                f,
                "Error: Archivo no encontrado. Por favor verifique la ruta del archivo."
            ),
            LoadError::MissingColumns(columns) => write!(
                f,
                "Error: faltan columnas esperadas en el archivo CSV: {}.",
                columns.join(", ")
            ),
            LoadError::Io(e) => write!(f, "Error inesperado: {}", e),
            LoadError::Csv(e) => write!(f, "Error inesperado: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            LoadError::NotFound(_) | LoadError::MissingColumns(_) => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err)
    }
}

/// Result of a fail-soft load: the questions, or an empty list plus the
/// reason nothing was loaded.
#[derive(Debug)]
pub struct LoadOutcome {
    pub questions: Vec<Question>,
    pub diagnostic: Option<LoadError>,
}

impl LoadOutcome {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Print the diagnostic, if any, to `out`.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(diagnostic) = &self.diagnostic {
            writeln!(out, "{}", diagnostic)?;
        }
        Ok(())
    }
}

/// One data row. Every cell is optional; empty cells deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawRow {
    question: Option<String>,
    correct_answer: Option<String>,
    incorrect_answer_1: Option<String>,
    incorrect_answer_2: Option<String>,
    incorrect_answer_3: Option<String>,
}

impl RawRow {
    /// Returns `None` for a row with no answer cells at all.
    fn into_question<R: Rng + ?Sized>(self, rng: &mut R) -> Option<Question> {
        let mut options: Vec<String> = [
            self.correct_answer.clone(),
            self.incorrect_answer_1,
            self.incorrect_answer_2,
            self.incorrect_answer_3,
        ]
        .into_iter()
        .flatten()
        .filter(|option| !option.is_empty())
        .collect();
        if options.is_empty() {
            return None;
        }
        options.shuffle(rng);

        let prompt = self
            .question
            .filter(|prompt| !prompt.is_empty())
            .unwrap_or_else(|| PROMPT_PLACEHOLDER.to_string());

        Some(Question::new(
            prompt,
            options,
            self.correct_answer.unwrap_or_default(),
        ))
    }
}

/// Load questions without ever failing; any error becomes an empty list
/// with a diagnostic.
pub fn load_questions<P: AsRef<Path>, R: Rng + ?Sized>(path: P, rng: &mut R) -> LoadOutcome {
    match load_questions_from_csv(path, rng) {
        Ok(questions) => LoadOutcome {
            questions,
            diagnostic: None,
        },
        Err(err) => {
            warn!("question bank not loaded: {}", err);
            LoadOutcome {
                questions: Vec::new(),
                diagnostic: Some(err),
            }
        }
    }
}

/// Load questions from a CSV file with a header row, shuffling each
/// question's options.
pub fn load_questions_from_csv<P: AsRef<Path>, R: Rng + ?Sized>(
    path: P,
    rng: &mut R,
) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    debug!("loading questions from {}", path.display());

    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(err),
    })?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader.headers()?.clone();
    check_columns(&headers)?;

    let mut questions = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let mut record = result?;
        pad_record(&mut record, headers.len());
        let row: RawRow = record.deserialize(Some(&headers))?;
        match row.into_question(rng) {
            Some(question) => questions.push(question),
            None => warn!("skipping row {} of {}: no answers", line + 2, path.display()),
        }
    }

    debug!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

fn check_columns(headers: &StringRecord) -> Result<(), LoadError> {
    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingColumns(missing))
    }
}

// Short rows get empty trailing cells so they deserialize like full ones.
fn pad_record(record: &mut StringRecord, width: usize) {
    while record.len() < width {
        record.push_field("");
    }
}
