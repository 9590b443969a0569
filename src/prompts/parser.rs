//! Answer parsers for line prompts.
//!
//! A parser turns one non-empty line into a [`Value`]. Empty lines never
//! reach a parser: [`LinePrompt`](super::LinePrompt) maps them to an absent
//! answer first. Answers are parsed exactly as typed, surrounding
//! whitespace included.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{PromptError, PromptResult};
use crate::types::{PrimitiveKind, Value};

/// Converts a non-empty answer line into a value.
///
/// Failures should be [`PromptError::AnswerInvalid`] so the user is asked
/// again. Any `Fn(&str) -> PromptResult<Value>` is a parser.
pub trait AnswerParser: Send + Sync {
    fn parse(&self, answer: &str) -> PromptResult<Value>;
}

impl<F> AnswerParser for F
where
    F: Fn(&str) -> PromptResult<Value> + Send + Sync,
{
    fn parse(&self, answer: &str) -> PromptResult<Value> {
        self(answer)
    }
}

/// The answer itself.
pub fn parse_text(answer: &str) -> PromptResult<Value> {
    Ok(Value::Text(answer.to_string()))
}

/// `true` or `false`, in any letter case.
pub fn parse_bool(answer: &str) -> PromptResult<Value> {
    if answer.eq_ignore_ascii_case("true") {
        Ok(Value::Bool(true))
    } else if answer.eq_ignore_ascii_case("false") {
        Ok(Value::Bool(false))
    } else {
        Err(PromptError::answer_invalid(format!("Illegal boolean: {answer}")))
    }
}

/// Exactly one character.
pub fn parse_char(answer: &str) -> PromptResult<Value> {
    let mut chars = answer.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Value::Char(c)),
        _ => Err(PromptError::answer_invalid(
            "Multiple characters provided where one is expected",
        )),
    }
}

/// `y` or `n`, in any letter case.
pub fn parse_yes_no(answer: &str) -> PromptResult<Value> {
    if answer.eq_ignore_ascii_case("y") {
        Ok(Value::Bool(true))
    } else if answer.eq_ignore_ascii_case("n") {
        Ok(Value::Bool(false))
    } else {
        Err(PromptError::answer_invalid(
            "Answer to a y/n prompt is not \"y\" or \"n\"",
        ))
    }
}

/// Parse a value of the given primitive kind.
pub fn parse_primitive(kind: PrimitiveKind, answer: &str) -> PromptResult<Value> {
    match kind {
        PrimitiveKind::Bool => parse_bool(answer),
        PrimitiveKind::Char => parse_char(answer),
        PrimitiveKind::I8 => parse_number(kind, answer).map(Value::I8),
        PrimitiveKind::I16 => parse_number(kind, answer).map(Value::I16),
        PrimitiveKind::I32 => parse_number(kind, answer).map(Value::I32),
        PrimitiveKind::I64 => parse_number(kind, answer).map(Value::I64),
        PrimitiveKind::U8 => parse_number(kind, answer).map(Value::U8),
        PrimitiveKind::U16 => parse_number(kind, answer).map(Value::U16),
        PrimitiveKind::U32 => parse_number(kind, answer).map(Value::U32),
        PrimitiveKind::U64 => parse_number(kind, answer).map(Value::U64),
        PrimitiveKind::F32 => parse_number(kind, answer).map(Value::F32),
        PrimitiveKind::F64 => parse_number(kind, answer).map(Value::F64),
    }
}

fn parse_number<T>(kind: PrimitiveKind, answer: &str) -> PromptResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    answer.parse().map_err(|err| {
        PromptError::answer_invalid(format!("Illegal {}: {answer} ({err})", kind.name()))
    })
}

/// Parser for a primitive kind, suitable for a [`LinePrompt`](super::LinePrompt).
pub fn primitive_parser(kind: PrimitiveKind) -> impl AnswerParser {
    move |answer: &str| parse_primitive(kind, answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(result: PromptResult<Value>) -> String {
        let err = result.unwrap_err();
        assert!(err.is_recoverable(), "{err} should be recoverable");
        err.to_string()
    }

    #[test]
    fn test_bool_is_case_insensitive() {
        assert!(matches!(parse_bool("TRUE"), Ok(Value::Bool(true))));
        assert!(matches!(parse_bool("False"), Ok(Value::Bool(false))));
        assert_eq!(reason(parse_bool("yes")), "Illegal boolean: yes");
    }

    #[test]
    fn test_char_requires_exactly_one() {
        assert!(matches!(parse_char("é"), Ok(Value::Char('é'))));
        assert_eq!(
            reason(parse_char("ab")),
            "Multiple characters provided where one is expected"
        );
    }

    #[test]
    fn test_yes_no() {
        assert!(matches!(parse_yes_no("Y"), Ok(Value::Bool(true))));
        assert!(matches!(parse_yes_no("n"), Ok(Value::Bool(false))));
        assert_eq!(
            reason(parse_yes_no("yes")),
            "Answer to a y/n prompt is not \"y\" or \"n\""
        );
    }

    #[test]
    fn test_numbers() {
        assert!(matches!(parse_primitive(PrimitiveKind::I32, "-5"), Ok(Value::I32(-5))));
        assert!(matches!(parse_primitive(PrimitiveKind::U64, "15"), Ok(Value::U64(15))));
        assert!(matches!(parse_primitive(PrimitiveKind::F64, "2.5"), Ok(Value::F64(v)) if v == 2.5));

        let message = reason(parse_primitive(PrimitiveKind::I32, "forty two"));
        assert!(message.starts_with("Illegal integer: forty two"));
        // Out of range for the kind
        reason(parse_primitive(PrimitiveKind::I8, "300"));
        reason(parse_primitive(PrimitiveKind::U16, "-1"));
    }

    #[test]
    fn test_surrounding_whitespace_is_rejected_for_every_kind() {
        reason(parse_primitive(PrimitiveKind::I64, " 15 "));
        reason(parse_primitive(PrimitiveKind::F32, "2.5 "));
        assert_eq!(reason(parse_bool(" true")), "Illegal boolean:  true");
        reason(parse_char(" x"));
        reason(parse_yes_no("y "));
        assert!(matches!(parse_text(" a "), Ok(Value::Text(t)) if t == " a "));
    }

    #[test]
    fn test_closures_are_parsers() {
        let upper = |answer: &str| -> PromptResult<Value> { Ok(Value::Text(answer.to_uppercase())) };
        assert!(matches!(upper.parse("abc"), Ok(Value::Text(t)) if t == "ABC"));
        assert!(matches!(primitive_parser(PrimitiveKind::Char).parse("x"), Ok(Value::Char('x'))));
    }
}
