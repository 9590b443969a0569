//! Interactive session over a line reader and a text writer.

use std::io::{self, BufRead, Write};

use crate::config::PromptConfig;
use crate::error::{PromptError, PromptResult};
use crate::prompts::PromptExt;
use crate::registry::Registry;
use crate::types::PromptValue;

/// Input source, output sink and registry for one interactive session.
///
/// Prompts receive the session by `&mut` and never buffer or duplicate the
/// underlying reader or writer.
///
/// # Example
///
/// ```
/// use prompter::{Registry, Session};
///
/// let registry = Registry::new();
/// let mut output = Vec::new();
/// let mut session = Session::new(&registry, "forty\n42\n".as_bytes(), &mut output);
///
/// let answer: i32 = session.ask().unwrap();
/// assert_eq!(answer, 42);
/// ```
pub struct Session<'a> {
    registry: &'a Registry,
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
}

impl<'a> Session<'a> {
    pub fn new(registry: &'a Registry, input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            registry,
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Presentation settings of the session's registry.
    pub fn settings(&self) -> &'a PromptConfig {
        &self.registry.settings().prompts
    }

    /// Write `text` without a line break and flush so it shows before a read.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Read one line, without its trailing line break.
    ///
    /// End of input is an error: a prompt cannot make progress without it.
    /// A line that is not valid UTF-8 is rejected as an invalid answer.
    pub fn read_line(&mut self) -> PromptResult<String> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )
            .into());
        }
        while bytes.last().is_some_and(|b| *b == b'\n' || *b == b'\r') {
            bytes.pop();
        }
        tracing::trace!("[session] read {} bytes", bytes.len());
        String::from_utf8(bytes)
            .map_err(|_| PromptError::answer_invalid("Answer is not valid UTF-8 text"))
    }

    /// Prompt for a `T` with the default message of its prompt.
    ///
    /// Non-`Option` types cannot be skipped: an empty answer is retried.
    /// `Option<_>` types return `None` when the user skips.
    pub fn ask<T: PromptValue>(&mut self) -> PromptResult<T> {
        self.acquire_typed(None)
    }

    /// Prompt for a `T` with a custom message.
    pub fn ask_with<T: PromptValue>(&mut self, message: &str) -> PromptResult<T> {
        self.acquire_typed(Some(message))
    }

    fn acquire_typed<T: PromptValue>(&mut self, message: Option<&str>) -> PromptResult<T> {
        let descriptor = T::descriptor();
        let result = self.registry.resolve(&descriptor).and_then(|prompt| {
            if T::NULLABLE {
                prompt.acquire_with(self, message, T::from_answer)
            } else {
                prompt.acquire_required_with(self, message, T::from_value)
            }
        });
        if let Err(err) = &result {
            tracing::warn!("[session] acquisition of {descriptor} aborted: {err}");
        }
        result
    }
}

impl Session<'static> {
    /// Session on the process's stdin and stdout using the global registry.
    pub fn stdio() -> Self {
        Session::new(Registry::global(), io::stdin().lock(), io::stdout())
    }
}
