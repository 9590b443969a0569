//! Non-nullable primitives on top of their nullable prompt.

use std::sync::Arc;

use super::{Prompt, PromptExt, default_message};
use crate::error::PromptResult;
use crate::io::Session;
use crate::types::{PrimitiveKind, TypeDescriptor, Value};

/// Acquires a primitive that can never be absent.
///
/// Delegates to the prompt registered for the nullable kind in required
/// mode, so a custom parser registered for `Boxed(kind)` also serves
/// `Primitive(kind)` slots.
pub struct BoxedPrompt {
    value_type: TypeDescriptor,
    default_message: String,
    boxed: Arc<dyn Prompt>,
}

impl BoxedPrompt {
    pub fn new(kind: PrimitiveKind, boxed: Arc<dyn Prompt>) -> Self {
        let value_type = TypeDescriptor::Primitive(kind);
        Self {
            default_message: default_message(&value_type),
            value_type,
            boxed,
        }
    }

    /// The nullable prompt this one delegates to.
    pub fn boxed(&self) -> &Arc<dyn Prompt> {
        &self.boxed
    }
}

impl Prompt for BoxedPrompt {
    fn value_type(&self) -> &TypeDescriptor {
        &self.value_type
    }

    fn default_message(&self) -> &str {
        &self.default_message
    }

    fn try_acquire(&self, session: &mut Session<'_>, message: &str) -> PromptResult<Option<Value>> {
        self.boxed.acquire_required(session, Some(message)).map(Some)
    }
}
