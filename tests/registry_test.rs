//! Registration, overriding and synthesis through the public API.

use std::sync::Arc;

use prompter::{
    LinePrompt, PrimitiveKind, Prompt, PromptError, PromptResult, Registry, Session, Settings,
    TypeDescriptor, Value,
};

#[test]
fn test_boxed_override_serves_primitive_slots() {
    let registry = Registry::new();
    // Accept "on"/"off" for every boolean
    registry.register_parser(
        TypeDescriptor::Boxed(PrimitiveKind::Bool),
        |answer: &str| -> PromptResult<Value> {
            match answer {
                "on" => Ok(Value::Bool(true)),
                "off" => Ok(Value::Bool(false)),
                other => Err(PromptError::answer_invalid(format!("Expected on or off, got {other}"))),
            }
        },
    );

    let mut output = Vec::new();
    let (optional, required) = {
        let mut session = registry.session("\ntrue\non\n".as_bytes(), &mut output);
        let optional: Option<bool> = session.ask().unwrap();
        let required: bool = session.ask().unwrap();
        (optional, required)
    };
    assert_eq!(optional, None);
    assert!(required);
    assert!(String::from_utf8(output).unwrap().contains("Expected on or off, got true"));
}

#[test]
fn test_unsupported_element_type() {
    let registry = Registry::new();
    let descriptor = TypeDescriptor::list_of(TypeDescriptor::named("uuid"));
    let err = registry.resolve(&descriptor).err().unwrap();
    assert_eq!(err.to_string(), "Cannot find prompt for uuid");
    // Neither the list nor its element was cached
    assert!(!registry.contains(&descriptor));
    assert!(!registry.contains(&TypeDescriptor::named("uuid")));
}

/// Answers with a fixed value without reading input.
struct Constant {
    value_type: TypeDescriptor,
}

impl Prompt for Constant {
    fn value_type(&self) -> &TypeDescriptor {
        &self.value_type
    }

    fn default_message(&self) -> &str {
        ""
    }

    fn try_acquire(&self, session: &mut Session<'_>, message: &str) -> PromptResult<Option<Value>> {
        session.println(&format!("{message}(using default)"))?;
        Ok(Some(Value::Text("anonymous".to_string())))
    }
}

#[test]
fn test_custom_prompt_implementation() {
    let registry = Registry::new();
    registry.register(
        TypeDescriptor::Text,
        Arc::new(Constant {
            value_type: TypeDescriptor::Text,
        }),
    );

    let mut output = Vec::new();
    let name = {
        let mut session = registry.session(std::io::empty(), &mut output);
        session.ask_with::<String>("Who? ").unwrap()
    };
    assert_eq!(name, "anonymous");
    assert_eq!(String::from_utf8(output).unwrap(), "Who? (using default)\n");
}

#[test]
fn test_seeded_entries_survive_lookup_of_new_types() {
    let registry = Registry::new();
    let before = registry.len();
    registry.resolve_for::<Vec<Option<u64>>>().unwrap();
    // List plus the Boxed(U64) element, which was already seeded
    assert_eq!(registry.len(), before + 1);
}

#[test]
fn test_registry_settings_are_shared_with_sessions() {
    let mut settings = Settings::default();
    settings.prompts.skip_question = "Skip? ".to_string();
    let registry = Registry::with_settings(Arc::new(settings));
    assert_eq!(registry.settings().prompts.skip_question, "Skip? ");

    let mut output = Vec::new();
    {
        let mut session = registry.session("y\n".as_bytes(), &mut output);
        let skipped: Option<Vec<String>> = session.ask().unwrap();
        assert!(skipped.is_none());
    }
    assert_eq!(String::from_utf8(output).unwrap(), "Input text list: \nSkip? ");
}

#[test]
fn test_global_registry_is_a_singleton() {
    let first = Registry::global();
    let second = Registry::global();
    assert!(std::ptr::eq(first, second));
    // Already created above
    assert!(!Registry::install_global(Settings::default()));
}

#[test]
fn test_line_prompt_with_message() {
    let registry = Registry::new();
    registry.register(
        TypeDescriptor::named("city"),
        Arc::new(LinePrompt::new(TypeDescriptor::named("city"), |answer: &str| -> PromptResult<Value> {
            Ok(Value::Text(answer.to_uppercase()))
        })
        .with_message("City: ")),
    );
    let prompt = registry.resolve(&TypeDescriptor::named("city")).unwrap();
    assert_eq!(prompt.default_message(), "City: ");
}
