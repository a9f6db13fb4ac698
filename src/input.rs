//! Reading a numbered answer from the player.

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

const ANSWER_PROMPT: &str = "Selecciona el número de tu respuesta: ";
const NOT_A_NUMBER: &str = "Entrada no válida. Por favor ingresa un número.";
const OUT_OF_RANGE: &str = "Por favor digita un número válido.";

/// Prompt until the player enters a number in `1..=num_options` and return
/// it as a zero-based index.
///
/// Invalid entries are reported and the prompt repeats with no retry limit.
/// Reaching end of input returns an `UnexpectedEof` error.
pub fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    num_options: usize,
) -> io::Result<usize> {
    let mut line = String::new();
    loop {
        write!(output, "{}", ANSWER_PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }

        match line.trim().parse::<i64>() {
            Ok(value) if value >= 1 && value as u64 <= num_options as u64 => {
                return Ok(value as usize - 1);
            }
            Ok(_) => writeln!(output, "{}", OUT_OF_RANGE)?,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    writeln!(output, "{}", OUT_OF_RANGE)?
                }
                _ => writeln!(output, "{}", NOT_A_NUMBER)?,
            },
        }
    }
}
