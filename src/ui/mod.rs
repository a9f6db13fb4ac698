mod quiz;
mod result;

pub use quiz::{render_feedback, render_question};
pub use result::{render_no_questions, render_summary};
