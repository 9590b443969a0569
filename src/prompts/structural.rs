//! Structural types, prompted property by property.

use std::sync::Arc;

use super::{Prompt, PromptExt, default_message, offer_skip};
use crate::error::{PromptError, PromptResult};
use crate::io::Session;
use crate::promptable::{Promptable, PropertyDescriptor, Schema};
use crate::types::{Object, TypeDescriptor, Value};

/// Acquires an instance of `P` by prompting for each retained property in
/// declaration order.
///
/// Property prompts are resolved through the session's registry on every
/// acquisition, so nested structural types and lists are synthesized on
/// first use and later registrations are honored.
pub struct StructuralPrompt<P> {
    value_type: TypeDescriptor,
    default_message: String,
    properties: Vec<PropertyDescriptor<P>>,
}

impl<P: Promptable> StructuralPrompt<P> {
    /// Introspect `P` and build its prompt.
    pub fn introspect() -> PromptResult<Self> {
        let properties = Schema::<P>::describe().introspect()?;
        let value_type = TypeDescriptor::structural::<P>();
        tracing::debug!(
            "[structural] introspected {} with {} properties",
            P::type_name(),
            properties.len()
        );
        Ok(Self {
            default_message: default_message(&value_type),
            value_type,
            properties,
        })
    }

    pub(crate) fn synthesize() -> PromptResult<Arc<dyn Prompt>> {
        Ok(Arc::new(Self::introspect()?))
    }

    /// Retained properties, in prompting order.
    pub fn properties(&self) -> &[PropertyDescriptor<P>] {
        &self.properties
    }
}

impl<P: Promptable> Prompt for StructuralPrompt<P> {
    fn value_type(&self) -> &TypeDescriptor {
        &self.value_type
    }

    fn default_message(&self) -> &str {
        &self.default_message
    }

    fn try_acquire(&self, session: &mut Session<'_>, message: &str) -> PromptResult<Option<Value>> {
        let mut instance = P::construct().map_err(|reason| {
            PromptError::illegal_structure(P::type_name(), format!("cannot construct instance: {reason}"))
        })?;

        session.println(message)?;
        if offer_skip(session)? {
            return Ok(None);
        }

        for property in &self.properties {
            let prompt = session.registry().resolve(property.value_type())?;
            let message = Some(property.message());
            if property.is_required() {
                prompt.acquire_required_with(session, message, |value| {
                    property.write(&mut instance, Some(value))
                })?;
            } else {
                prompt.acquire_with(session, message, |answer| property.write(&mut instance, answer))?;
            }
        }

        Ok(Some(Value::Object(Object::new(instance))))
    }
}
