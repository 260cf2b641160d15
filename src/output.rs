//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Everything except `error` writes to the given writer so the exploration can run against any sink.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print section header (cyan bold)
pub fn header(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg.to_string().cyan().bold())
}

/// Announce the room the cursor is in
pub fn room(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Voce esta em: {}", name.bold())
}

/// Print one available exit, e.g. `[E] Esquerda (para Cozinha)`
pub fn choice(out: &mut impl Write, key: char, label: &str, target: &str) -> io::Result<()> {
    writeln!(out, "{} {} (para {})", format!("[{}]", key).green(), label, target)
}

/// Print warning (yellow) for a rejected choice
pub fn warning(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg.to_string().yellow())
}

/// Print success status (green checkmark)
pub fn success(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".green(), msg)
}

/// Print plain output (no color)
pub fn info(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg)
}

/// Print indented detail (no color)
pub fn detail(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "  {}", msg)
}

/// Print prompt without newline (cyan)
pub fn prompt(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    write!(out, "{} ", msg.to_string().cyan())?;
    out.flush()
}
