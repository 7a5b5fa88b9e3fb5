use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

pub const PREFERENCE_PROMPT: &str = "Input a preference: ";
pub const CONTINUE_PROMPT: &str = "Do you want to add another preference? (Y/N): ";

/// Errors that can occur while collecting preferences
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trim and lower-case a raw preference so it lines up with catalog tags
pub fn normalize_preference(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Interactive preference collection over any line source
///
/// Each round reads one preference, then asks whether to continue. Only an
/// explicit `n` ends the loop; end of input also ends it.
pub struct PreferencePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PreferencePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Run the prompt loop until the user declines or input runs out
    pub fn collect(&mut self) -> Result<Vec<String>, InputError> {
        let mut preferences = Vec::new();

        loop {
            let Some(pref) = self.ask(PREFERENCE_PROMPT)? else {
                break;
            };
            debug!(preference = %pref, "Preference entered");
            preferences.push(pref);

            match self.ask(CONTINUE_PROMPT)? {
                Some(answer) if answer == "n" => break,
                Some(_) => continue,
                None => break,
            }
        }

        Ok(preferences)
    }

    /// Write a prompt and read one normalized line; None on end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(normalize_preference(&line)))
    }
}

/// Collect from an iterator of answers without writing any prompts
///
/// Answers alternate: preference, continue?, preference, continue?, ...
pub fn preferences_from_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();
    let mut preferences = Vec::new();

    while let Some(raw) = lines.next() {
        preferences.push(normalize_preference(raw.as_ref()));

        match lines.next() {
            Some(answer) if normalize_preference(answer.as_ref()) == "n" => break,
            Some(_) => continue,
            None => break,
        }
    }

    preferences
}
