//! Warnings, confirmations, and the clipboard fallback question.
//!
//! Everything goes to stderr. A [`Prompts`] carries the quiet flag so callers
//! decide per context what gets shown; errors bypass it.

use std::io::{self, BufRead, Write};

use crossterm::tty::IsTty;

use crate::terminal::{print_error, print_warning};

/// Error to stderr (red). Never suppressed.
pub fn error(msg: &str) {
    print_error(msg);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Prompts {
    quiet: bool,
}

impl Prompts {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            print_warning(msg);
        }
    }

    pub fn clipboard_copied(&self, count: usize) {
        if !self.quiet {
            eprintln!("*** {count} password(s) COPIED TO CLIPBOARD ***");
        }
    }

    pub fn passwords_written(&self, count: usize, path: &str) {
        if !self.quiet {
            eprintln!("{count} password(s) \u{2192} {path}");
        }
    }

    pub fn settings_saved(&self, path: &str) {
        if !self.quiet {
            eprintln!("Settings saved \u{2192} {path}");
        }
    }

    /// Asks whether to print instead when the clipboard can't be opened.
    /// Quiet or non-interactive runs fall back without asking.
    pub fn clipboard_fallback(&self) -> bool {
        if self.quiet || !io::stdin().is_tty() {
            return true;
        }
        eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
        let _ = io::stderr().flush();

        let accepted = accepts_fallback(&mut io::stdin().lock());
        if !accepted {
            eprintln!("Aborted.");
        }
        accepted
    }
}

/// Empty answer, `y`, or `yes` accept; so does an unreadable stdin.
fn accepts_fallback<R: BufRead>(input: &mut R) -> bool {
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes"),
        Err(_) => true,
    }
}
