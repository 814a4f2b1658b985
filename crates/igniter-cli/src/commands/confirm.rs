//! Confirmation prompt before destructive commands

use crate::error::CliError;
use std::io::{BufRead, Write};

/// Ask a yes/no question; anything but "y" or "yes" means no
pub fn confirm(question: &str) -> Result<bool, CliError> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    ask(question, &mut stdin.lock(), &mut stdout)
}

fn ask(
    question: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<bool, CliError> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
