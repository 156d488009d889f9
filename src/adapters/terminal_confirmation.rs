use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::domain::confirmation::is_affirmative;
use crate::ports::ConfirmationPort;

const PROMPT: &str = "Do you want to continue [n/Y]";

/// Asks on the controlling terminal, or reads one line from piped stdin.
#[derive(Debug, Clone, Default)]
pub struct TerminalConfirmation;

impl TerminalConfirmation {
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmationPort for TerminalConfirmation {
    fn confirm(&self, summary: &str) -> Result<bool, AppError> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return confirm_from(summary, &mut stdin.lock(), &mut io::stdout().lock())
                .map_err(AppError::from);
        }

        println!("{}", summary);
        match Input::<String>::new().with_prompt(PROMPT).allow_empty(true).interact_text() {
            Ok(answer) => Ok(is_affirmative(&answer)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
            Err(err) => {
                Err(AppError::Io(io::Error::other(format!("Failed to read confirmation: {}", err))))
            }
        }
    }
}

/// Print the summary and prompt to `writer`, then read one answer line from `reader`.
///
/// End of input and undecodable bytes count as a refusal.
fn confirm_from<R: BufRead, W: Write>(
    summary: &str,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<bool> {
    writeln!(writer, "{}", summary)?;
    write!(writer, "{} ", PROMPT)?;
    writer.flush()?;

    let mut answer = Vec::new();
    reader.read_until(b'\n', &mut answer)?;
    Ok(is_affirmative(&String::from_utf8_lossy(&answer)))
}
