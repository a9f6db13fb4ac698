use std::io::{Cursor, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;
use trivia_quiz::{Question, Quiz, QuizError, QuizSummary};

const HEADER: &str =
    "question,correct_answer,incorrect_answer_1,incorrect_answer_2,incorrect_answer_3\n";

fn two_questions() -> Vec<Question> {
    vec![
        Question::new("Is water wet?", vec!["yes".into(), "no".into()], "yes"),
        Question::new("Which way is the sky?", vec!["up".into(), "down".into()], "up"),
    ]
}

fn play(quiz: Quiz, answers: &str) -> (Result<Option<QuizSummary>, QuizError>, String) {
    let mut input = Cursor::new(answers.as_bytes().to_vec());
    let mut output = Vec::new();
    let result = quiz.run_with(&mut input, &mut output, &mut StdRng::seed_from_u64(11));
    (result, String::from_utf8(output).unwrap())
}

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn all_correct_answers_score_full_marks() {
    let (result, output) = play(Quiz::new(two_questions()), "1\n1\n");

    assert_eq!(result.unwrap(), Some(QuizSummary { score: 2, total: 2 }));
    assert_eq!(output.matches("¡Correcto!").count(), 2);
    assert!(output.contains("Tu puntaje final es de 2/2."));
}

#[test]
fn all_wrong_answers_score_zero() {
    let (result, output) = play(Quiz::new(two_questions()), "2\n2\n");

    assert_eq!(result.unwrap(), Some(QuizSummary { score: 0, total: 2 }));
    assert!(output.contains("La respuesta correcta era: yes"));
    assert!(output.contains("La respuesta correcta era: up"));
    assert!(output.contains("Tu puntaje final es de 0/2."));
}

#[test]
fn questions_are_numbered_against_total() {
    let (_, output) = play(Quiz::new(two_questions()), "1\n1\n");

    assert!(output.contains("Question 1/2: "));
    assert!(output.contains("Question 2/2: "));
    assert!(output.contains("1. "));
    assert!(output.contains("2. "));
}

#[test]
fn invalid_answers_reprompt_same_question() {
    let (result, output) = play(Quiz::new(two_questions()), "abc\n0\n5\n1\n1\n");

    assert_eq!(result.unwrap().unwrap().score, 2);
    assert_eq!(output.matches("Question 1/2").count(), 1);
    assert_eq!(output.matches("Entrada no válida").count(), 1);
    assert_eq!(output.matches("Por favor digita un número válido.").count(), 2);
}

#[test]
fn empty_quiz_prints_notice_without_score() {
    let (result, output) = play(Quiz::new(Vec::new()), "");

    assert_eq!(result.unwrap(), None);
    assert!(output.contains("No hay preguntas cargadas"));
    assert!(!output.contains("puntaje"));
}

#[test]
fn closed_input_mid_quiz_is_an_error() {
    let (result, _) = play(Quiz::new(two_questions()), "1\n");
    assert!(matches!(
        result,
        Err(QuizError::Io(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof
    ));
}

#[test]
fn csv_bank_plays_end_to_end() {
    let file = csv_file(&format!("{HEADER}Only answer?,sure,,,\nAnother?,fine,,,\n"));
    let quiz = Quiz::from_csv(file.path(), &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(quiz.app().total_questions(), 2);

    let (result, _) = play(quiz, "1\n1\n");
    assert_eq!(result.unwrap(), Some(QuizSummary { score: 2, total: 2 }));
}

#[test]
fn missing_file_degrades_to_empty_quiz() {
    let dir = tempfile::tempdir().unwrap();
    let mut diagnostics = Vec::new();
    let quiz = Quiz::load(
        dir.path().join("missing.csv"),
        &mut diagnostics,
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();

    let diagnostics = String::from_utf8(diagnostics).unwrap();
    assert!(diagnostics.contains("Archivo no encontrado"));

    let (result, output) = play(quiz, "");
    assert_eq!(result.unwrap(), None);
    assert!(output.contains("No hay preguntas cargadas"));
}

#[test]
fn missing_column_degrades_to_empty_quiz() {
    let file = csv_file("question,correct_answer,incorrect_answer_1,incorrect_answer_2\nQ,A,B,C\n");
    let mut diagnostics = Vec::new();
    let quiz = Quiz::load(file.path(), &mut diagnostics, &mut StdRng::seed_from_u64(1)).unwrap();

    assert_eq!(quiz.app().total_questions(), 0);
    assert!(String::from_utf8(diagnostics).unwrap().contains("incorrect_answer_3"));
}

#[test]
fn strict_load_surfaces_error() {
    let file = csv_file("question\nQ\n");
    let err = Quiz::from_csv(file.path(), &mut StdRng::seed_from_u64(1)).err().unwrap();
    assert!(matches!(err, QuizError::Load(_)));
}
