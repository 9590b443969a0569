//! Prompt strategies and the shared retry protocol.
//!
//! Every strategy implements [`Prompt::try_acquire`], a single attempt at
//! reading one value. [`PromptExt`] layers the acquisition modes on top of
//! it, so error recovery, message defaulting and the skip/required
//! distinction behave the same for every prompt:
//!
//! - [`PromptExt::acquire`] returns `None` when the user skips,
//! - [`PromptExt::acquire_required`] retries until a value is supplied,
//! - the `_with` variants run a postprocessing step inside the loop, so a
//!   rejection there is retried like a parse failure.
//!
//! Recoverable errors print a retry notice to the session output and ask
//! again. Fatal errors leave the loop immediately.

pub mod boxed;
pub mod line;
pub mod list;
pub mod parser;
pub mod structural;

pub use boxed::BoxedPrompt;
pub use line::LinePrompt;
pub use list::ListPrompt;
pub use parser::AnswerParser;
pub use structural::StructuralPrompt;

use crate::debug_event;
use crate::error::{PromptError, PromptResult};
use crate::io::Session;
use crate::types::{DEFINITE_ANSWER, PrimitiveKind, TypeDescriptor, Value, shape_mismatch};

/// A strategy that acquires one value of a declared type.
///
/// Prompts are immutable and shared by every caller through the
/// [`Registry`](crate::Registry); they must not keep per-call state.
pub trait Prompt: Send + Sync {
    /// Type of the values this prompt produces.
    fn value_type(&self) -> &TypeDescriptor;

    /// Message used when the caller does not supply one.
    fn default_message(&self) -> &str;

    /// Make a single attempt at acquiring a value.
    ///
    /// Returns `Ok(None)` when the user skipped. A recoverable
    /// [`PromptError::AnswerInvalid`] makes the caller's loop ask again.
    fn try_acquire(&self, session: &mut Session<'_>, message: &str) -> PromptResult<Option<Value>>;
}

/// Acquisition modes shared by every [`Prompt`].
pub trait PromptExt: Prompt {
    /// Ask until an attempt and its postprocessing both succeed.
    fn acquire_with<R, F>(
        &self,
        session: &mut Session<'_>,
        message: Option<&str>,
        mut postprocess: F,
    ) -> PromptResult<R>
    where
        F: FnMut(Option<Value>) -> PromptResult<R>,
    {
        let message = message.unwrap_or_else(|| self.default_message());
        loop {
            match self.try_acquire(session, message).and_then(&mut postprocess) {
                Ok(result) => return Ok(result),
                Err(err) if err.is_recoverable() => {
                    debug_event!("prompt", "answer rejected", "{}: {err}", self.value_type());
                    let notice = format!("{}: {err}", session.settings().retry_notice);
                    session.println(&notice)?;
                }
                Err(err) => {
                    debug_event!("prompt", "aborted", "{}: {err}", self.value_type());
                    return Err(err);
                }
            }
        }
    }

    /// Ask once, retrying only malformed answers; `None` means skipped.
    fn acquire(&self, session: &mut Session<'_>, message: Option<&str>) -> PromptResult<Option<Value>> {
        self.acquire_with(session, message, Ok)
    }

    /// Like [`acquire_with`](Self::acquire_with), but an absent answer is
    /// rejected and asked again.
    fn acquire_required_with<R, F>(
        &self,
        session: &mut Session<'_>,
        message: Option<&str>,
        mut postprocess: F,
    ) -> PromptResult<R>
    where
        F: FnMut(Value) -> PromptResult<R>,
    {
        self.acquire_with(session, message, |answer| match answer {
            Some(value) => postprocess(value),
            None => Err(PromptError::answer_invalid(DEFINITE_ANSWER)),
        })
    }

    fn acquire_required(&self, session: &mut Session<'_>, message: Option<&str>) -> PromptResult<Value> {
        self.acquire_required_with(session, message, Ok)
    }
}

impl<P: Prompt + ?Sized> PromptExt for P {}

/// `"Input <type name>: "`
pub fn default_message(value_type: &TypeDescriptor) -> String {
    format!("Input {value_type}: ")
}

/// Ask the yes/no skip question used by composite prompts.
pub(crate) fn offer_skip(session: &mut Session<'_>) -> PromptResult<bool> {
    let yes_no = session.registry().yes_no();
    let question = session.settings().skip_question.as_str();
    yes_no.acquire_required_with(session, Some(question), |value| {
        value
            .as_bool()
            .ok_or_else(|| shape_mismatch(&TypeDescriptor::Boxed(PrimitiveKind::Bool), &value))
    })
}
