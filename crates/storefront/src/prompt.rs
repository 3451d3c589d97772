//! Blocking user notifications and confirmations.

use std::io::{BufRead, Write};

use tracing::warn;

/// Blocking dialogs the admin console needs.
pub trait Prompt {
    /// Show a message and wait until the user has seen it.
    fn notify(&mut self, message: &str);

    /// Ask a yes/no question. Anything but an explicit yes is a no.
    fn confirm(&mut self, question: &str) -> bool;
}

/// Prompt backed by a terminal's stdin/stdout.
#[derive(Debug)]
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl TerminalPrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the process's stdin and stdout.
    #[must_use]
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), assume_yes)
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Prompt on arbitrary streams.
    ///
    /// With `assume_yes`, confirmations are answered without reading input.
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.output, "{line}").and_then(|()| self.output.flush()) {
            warn!(error = %e, "Failed to write prompt");
        }
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn notify(&mut self, message: &str) {
        self.write_line(message);
    }

    fn confirm(&mut self, question: &str) -> bool {
        if self.assume_yes {
            self.write_line(&format!("{question} [y/N] y"));
            return true;
        }

        if let Err(e) = write!(self.output, "{question} [y/N] ").and_then(|()| self.output.flush())
        {
            warn!(error = %e, "Failed to write prompt");
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                warn!(error = %e, "Failed to read confirmation, treating as no");
                false
            }
        }
    }
}

/// Prompt that replays scripted answers and records what it was shown.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompt {
    pub(crate) answers: std::collections::VecDeque<bool>,
    pub(crate) notifications: Vec<String>,
    pub(crate) questions: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub(crate) fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
