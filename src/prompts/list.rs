//! Lists of elements of one type.

use std::sync::Arc;

use super::{Prompt, PromptExt, default_message, offer_skip};
use crate::error::PromptResult;
use crate::io::Session;
use crate::types::{TypeDescriptor, Value};

/// Acquires a list by prompting for elements until one is left empty.
///
/// The element prompt runs in optional mode, so its element type must be
/// able to produce an absent answer (`Text`, `Boxed`, a list or a
/// structural type). The whole list can be skipped with the skip question.
pub struct ListPrompt {
    value_type: TypeDescriptor,
    default_message: String,
    element: Arc<dyn Prompt>,
}

impl ListPrompt {
    pub fn new(element: Arc<dyn Prompt>) -> Self {
        let value_type = TypeDescriptor::list_of(element.value_type().clone());
        Self {
            default_message: default_message(&value_type),
            value_type,
            element,
        }
    }

    pub fn element(&self) -> &Arc<dyn Prompt> {
        &self.element
    }
}

impl Prompt for ListPrompt {
    fn value_type(&self) -> &TypeDescriptor {
        &self.value_type
    }

    fn default_message(&self) -> &str {
        &self.default_message
    }

    fn try_acquire(&self, session: &mut Session<'_>, message: &str) -> PromptResult<Option<Value>> {
        session.println(message)?;
        if offer_skip(session)? {
            return Ok(None);
        }

        let settings = session.settings();
        if settings.show_list_hint {
            session.println(&settings.list_hint)?;
        }

        let mut elements = Vec::new();
        loop {
            let label = format!("Element {}: ", elements.len() + 1);
            match self.element.acquire(session, Some(&label))? {
                Some(element) => elements.push(element),
                None => break,
            }
        }
        tracing::trace!("[list] acquired {} elements of {}", elements.len(), self.element.value_type());
        Ok(Some(Value::List(elements)))
    }
}
