//! Whether qclear's stdout report gets ANSI color.
//!
//! The report is often piped into logs by reset scripts, so color is only
//! on for an interactive terminal unless the environment says otherwise.

use std::env;

/// `true` when stdout is an interactive terminal.
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Decides color for the report, checking in order:
/// - `NO_COLOR` (any value): disables color (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    color_from_env(|key| env::var(key).ok(), is_tty)
}

/// Applies the color conventions to an arbitrary variable lookup.
///
/// `tty` is only consulted when no variable decides the outcome.
fn color_from_env(lookup: impl Fn(&str) -> Option<String>, tty: impl FnOnce() -> bool) -> bool {
    if lookup("NO_COLOR").is_some() {
        return false;
    }
    if lookup("CLICOLOR").as_deref() == Some("0") {
        return false;
    }
    if lookup("TERM").as_deref() == Some("dumb") {
        return false;
    }
    if lookup("CLICOLOR_FORCE").is_some() {
        return true;
    }
    tty()
}
