//! Error types for prompt resolution and acquisition.

use thiserror::Error;

use crate::types::TypeDescriptor;

/// Errors raised while resolving or running a prompt.
///
/// Only [`PromptError::AnswerInvalid`] is recoverable: the retry loop of the
/// prompt that produced it prints a notice and asks again. Every other
/// variant aborts the whole acquisition, including any enclosing composite
/// prompts.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The answer could not be parsed or was rejected by validation.
    #[error("{reason}")]
    AnswerInvalid { reason: String },

    /// No prompt is registered for the type and none can be synthesized.
    #[error("Cannot find prompt for {descriptor}")]
    UnsupportedType { descriptor: TypeDescriptor },

    /// A structural type violates the promptable contract.
    #[error("Illegal promptable {type_name}: {reason}")]
    IllegalStructure { type_name: String, reason: String },

    /// Reading the answer or writing the prompt failed.
    #[error("Prompt I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PromptError {
    /// Create a recoverable answer error.
    pub fn answer_invalid(reason: impl Into<String>) -> Self {
        PromptError::AnswerInvalid {
            reason: reason.into(),
        }
    }

    /// Create a structural contract error for the named type.
    pub fn illegal_structure(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        PromptError::IllegalStructure {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Whether the retry loop may absorb this error and ask again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PromptError::AnswerInvalid { .. })
    }
}

pub type PromptResult<T> = Result<T, PromptError>;
