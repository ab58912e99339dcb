//! Interactive yes/no confirmation on stdin.

use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET};
use std::io::{BufRead, Write};

/// Only an explicit "y" / "yes" proceeds.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask `question` and read one line; EOF counts as "no".
pub fn confirm<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    out: &mut W,
) -> AppResult<bool> {
    write!(out, "\n{}❓ {}{} (yes/no): ", CYAN, question, RESET)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    writeln!(out)?;

    Ok(is_affirmative(&answer))
}

/// [`confirm`] bound to the process stdin/stdout.
pub fn confirm_stdin(question: &str) -> AppResult<bool> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    confirm(question, &mut stdin.lock(), &mut stdout.lock())
}
