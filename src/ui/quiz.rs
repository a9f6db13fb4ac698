use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::app::AnswerOutcome;
use crate::models::Question;

/// Print the question header followed by its numbered options.
pub fn render_question<W: Write>(
    out: &mut W,
    number: usize,
    total: usize,
    question: &Question,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Question {}/{}: {}", number, total, question.prompt)?;
    for (index, option) in question.options.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, option)?;
    }
    Ok(())
}

pub fn render_feedback<W: Write>(
    out: &mut W,
    outcome: AnswerOutcome,
    question: &Question,
) -> io::Result<()> {
    match outcome {
        AnswerOutcome::Correct => writeln!(out, "{}", "¡Correcto!".green().bold()),
        AnswerOutcome::Incorrect => writeln!(
            out,
            "{} La respuesta correcta era: {}",
            "Incorrecto.".red().bold(),
            question.correct_answer
        ),
    }
}
