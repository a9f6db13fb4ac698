use std::env;
use std::io;

use crossterm::style::force_color_output;
use crossterm::tty::IsTty;

/// Enable coloured feedback only when stdout is a terminal and `NO_COLOR`
/// is not set.
pub fn init() -> bool {
    let enabled = io::stdout().is_tty() && env::var_os("NO_COLOR").is_none();
    force_color_output(enabled);
    enabled
}
