//! Single-line prompts.

use super::parser::{self, AnswerParser};
use super::{Prompt, default_message};
use crate::error::PromptResult;
use crate::io::Session;
use crate::types::{PrimitiveKind, TypeDescriptor, Value};

/// Prints the message, reads one line and parses it.
///
/// An empty line is an absent answer and never reaches the parser.
pub struct LinePrompt {
    value_type: TypeDescriptor,
    default_message: String,
    parser: Box<dyn AnswerParser>,
}

impl LinePrompt {
    pub fn new(value_type: TypeDescriptor, parser: impl AnswerParser + 'static) -> Self {
        Self {
            default_message: default_message(&value_type),
            value_type,
            parser: Box::new(parser),
        }
    }

    /// Replace the derived default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = message.into();
        self
    }

    /// Prompt for a line of text.
    pub fn text() -> Self {
        Self::new(TypeDescriptor::Text, parser::parse_text)
    }

    /// Prompt for a nullable primitive of the given kind.
    pub fn boxed(kind: PrimitiveKind) -> Self {
        Self::new(TypeDescriptor::Boxed(kind), parser::primitive_parser(kind))
    }

    /// Prompt for `y` or `n`, producing a boolean.
    pub fn yes_no() -> Self {
        Self::new(TypeDescriptor::Boxed(PrimitiveKind::Bool), parser::parse_yes_no)
            .with_message("y/n: ")
    }
}

impl Prompt for LinePrompt {
    fn value_type(&self) -> &TypeDescriptor {
        &self.value_type
    }

    fn default_message(&self) -> &str {
        &self.default_message
    }

    fn try_acquire(&self, session: &mut Session<'_>, message: &str) -> PromptResult<Option<Value>> {
        session.print(message)?;
        let answer = session.read_line()?;
        if answer.is_empty() {
            return Ok(None);
        }
        self.parser.parse(&answer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::PromptExt;
    use crate::{PromptError, Registry};

    fn acquire(prompt: &LinePrompt, input: &str) -> (PromptResult<Option<Value>>, String) {
        let registry = Registry::new();
        let mut output = Vec::new();
        let result = {
            let mut session = Session::new(&registry, input.as_bytes(), &mut output);
            prompt.acquire(&mut session, None)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_empty_line_is_absent() {
        let (result, output) = acquire(&LinePrompt::boxed(PrimitiveKind::I32), "\n");
        assert!(result.unwrap().is_none());
        assert_eq!(output, "Input integer: ");
    }

    #[test]
    fn test_malformed_answer_is_retried() {
        let (result, output) = acquire(&LinePrompt::boxed(PrimitiveKind::I32), "forty two\n42\n");
        assert!(matches!(result.unwrap(), Some(Value::I32(42))));
        assert!(output.starts_with(
            "Input integer: Please try again, answer is invalid: Illegal integer: forty two"
        ));
        assert!(output.ends_with("\nInput integer: "));
    }

    #[test]
    fn test_text_keeps_whitespace() {
        let (result, _) = acquire(&LinePrompt::text(), "  Ada Lovelace \n");
        assert_eq!(result.unwrap().unwrap().as_text(), Some("  Ada Lovelace "));
    }

    #[test]
    fn test_custom_parser_and_message() {
        let prompt = LinePrompt::new(TypeDescriptor::named("email"), |answer: &str| {
            if answer.contains('@') {
                Ok(Value::Text(answer.to_string()))
            } else {
                Err(PromptError::answer_invalid("missing @"))
            }
        })
        .with_message("Email: ");
        let (result, output) = acquire(&prompt, "ada\nada@example.com\n");
        assert_eq!(result.unwrap().unwrap().as_text(), Some("ada@example.com"));
        assert_eq!(
            output,
            "Email: Please try again, answer is invalid: missing @\nEmail: "
        );
    }

    #[test]
    fn test_end_of_input_aborts() {
        let (result, _) = acquire(&LinePrompt::text(), "");
        assert!(matches!(result, Err(PromptError::Io(_))));
    }
}
