//! Interactive read-eval-print loop

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use quickbeam::Session;

use crate::render_error;

const PROMPT: &str = ">> ";

/// Read lines until Ctrl-D, evaluating each in `session`.
///
/// Ctrl-C abandons the current line and keeps the session.
pub fn run(session: Session) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!(
        "quickbeam {} (type help() for usage, Ctrl-D to exit)",
        quickbeam::VERSION
    );

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;
                if let Some(output) = eval_line(&session, &line) {
                    println!("{}", output);
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Evaluate one line, returning the text to print, if any.
fn eval_line(session: &Session, line: &str) -> Option<String> {
    match session.run(line) {
        Ok(value) => value.map(|v| v.to_string()),
        Err(err) => Some(render_error(&err)),
    }
}
