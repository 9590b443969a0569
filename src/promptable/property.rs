//! Property declarations and their introspected descriptors.

use std::sync::Arc;

use crate::error::{PromptError, PromptResult};
use crate::types::{PromptValue, TypeDescriptor, Value};
use crate::utils::human_readable_name;

type Setter<P> = Arc<dyn Fn(&mut P, Option<Value>) -> PromptResult<()> + Send + Sync>;

/// One declared property, as written in [`Promptable::describe`](super::Promptable::describe).
pub struct PropertyDecl<P> {
    name: String,
    value_type: TypeDescriptor,
    nullable: bool,
    required: bool,
    ignored: bool,
    message: Option<String>,
    setter: Setter<P>,
}

impl<P: 'static> PropertyDecl<P> {
    pub(super) fn new<V, F>(name: String, setter: F) -> Self
    where
        V: PromptValue,
        F: Fn(&mut P, V) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            name,
            value_type: V::descriptor(),
            nullable: V::NULLABLE,
            required: false,
            ignored: false,
            message: None,
            setter: Arc::new(move |instance: &mut P, answer: Option<Value>| {
                let value = V::from_answer(answer)?;
                setter(instance, value).map_err(PromptError::answer_invalid)
            }),
        }
    }

    /// Reject absent answers for this property.
    pub fn required(&mut self) -> &mut Self {
        self.required = true;
        self
    }

    /// Use a custom prompt message instead of the derived one.
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    /// Never prompt for this property.
    pub fn ignore(&mut self) -> &mut Self {
        self.ignored = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Route the setter through an embedded base instance.
    pub(super) fn project<Q: 'static>(self, project: fn(&mut Q) -> &mut P) -> PropertyDecl<Q> {
        let setter = self.setter;
        PropertyDecl {
            name: self.name,
            value_type: self.value_type,
            nullable: self.nullable,
            required: self.required,
            ignored: self.ignored,
            message: self.message,
            setter: Arc::new(move |instance: &mut Q, answer: Option<Value>| {
                setter(project(instance), answer)
            }),
        }
    }

    /// `None` for ignored properties.
    pub(super) fn into_descriptor(self) -> Option<PropertyDescriptor<P>> {
        if self.ignored {
            return None;
        }
        let message = self
            .message
            .unwrap_or_else(|| format!("Input {}: ", human_readable_name(&self.name)));
        Some(PropertyDescriptor {
            required: self.required || !self.nullable,
            name: self.name,
            value_type: self.value_type,
            message,
            setter: self.setter,
        })
    }
}

/// A retained property of a structural type, fixed after introspection.
pub struct PropertyDescriptor<P> {
    name: String,
    value_type: TypeDescriptor,
    required: bool,
    message: String,
    setter: Setter<P>,
}

impl<P> PropertyDescriptor<P> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> &TypeDescriptor {
        &self.value_type
    }

    /// Whether an absent answer is retried instead of accepted.
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Write an answer into `instance` through the declared setter.
    pub fn write(&self, instance: &mut P, answer: Option<Value>) -> PromptResult<()> {
        (self.setter)(instance, answer)
    }
}

impl<P> std::fmt::Debug for PropertyDescriptor<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("value_type", &self.value_type)
            .field("required", &self.required)
            .field("message", &self.message)
            .finish()
    }
}
