use std::io::{self, Write};

pub fn render_no_questions<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "No hay preguntas cargadas. Saliendo del cuestionario.")
}

pub fn render_summary<W: Write>(out: &mut W, score: usize, total: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "¡Quiz completado! Tu puntaje final es de {}/{}.", score, total)
}
