//! Coloured one-line messages for the terminal user. Diagnostics go through
//! the `log` facade instead; these are what the user is meant to read.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn emit<T: fmt::Display>(level: Level, msg: T) {
    let (color, icon) = level.style();
    match level {
        Level::Error => eprintln!("{}{}{} {}{}", color, BOLD, icon, RESET, msg),
        _ => println!("{}{}{} {}{}", color, BOLD, icon, RESET, msg),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Section title, e.g. above the monthly listing.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", Level::Info.style().0, BOLD, msg, RESET);
}
