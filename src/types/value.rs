//! Dynamic values produced by prompts and the typed bridge back to Rust.

use std::any::Any;
use std::fmt;

use super::{PrimitiveKind, TypeDescriptor};
use crate::error::{PromptError, PromptResult};
use crate::promptable::Promptable;

/// Reason reported when a non-skippable answer was left empty.
pub(crate) const DEFINITE_ANSWER: &str = "Answer should be definite";

/// A value acquired by a prompt.
///
/// An absent answer is represented as `Option::<Value>::None`, never as a
/// variant of this enum.
pub enum Value {
    Text(String),
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    List(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Bool(_) => PrimitiveKind::Bool.name(),
            Value::Char(_) => PrimitiveKind::Char.name(),
            Value::I8(_) => PrimitiveKind::I8.name(),
            Value::I16(_) => PrimitiveKind::I16.name(),
            Value::I32(_) => PrimitiveKind::I32.name(),
            Value::I64(_) => PrimitiveKind::I64.name(),
            Value::U8(_) => PrimitiveKind::U8.name(),
            Value::U16(_) => PrimitiveKind::U16.name(),
            Value::U32(_) => PrimitiveKind::U32.name(),
            Value::U64(_) => PrimitiveKind::U64.name(),
            Value::F32(_) => PrimitiveKind::F32.name(),
            Value::F64(_) => PrimitiveKind::F64.name(),
            Value::List(_) => "list",
            Value::Object(object) => object.type_name(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Value::I8(v) => f.debug_tuple("I8").field(v).finish(),
            Value::I16(v) => f.debug_tuple("I16").field(v).finish(),
            Value::I32(v) => f.debug_tuple("I32").field(v).finish(),
            Value::I64(v) => f.debug_tuple("I64").field(v).finish(),
            Value::U8(v) => f.debug_tuple("U8").field(v).finish(),
            Value::U16(v) => f.debug_tuple("U16").field(v).finish(),
            Value::U32(v) => f.debug_tuple("U32").field(v).finish(),
            Value::U64(v) => f.debug_tuple("U64").field(v).finish(),
            Value::F32(v) => f.debug_tuple("F32").field(v).finish(),
            Value::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Object(object) => object.fmt(f),
        }
    }
}

/// A type-erased structural instance.
pub struct Object {
    type_name: &'static str,
    inner: Box<dyn Any + Send>,
}

impl Object {
    pub fn new<P: Promptable>(instance: P) -> Self {
        Self {
            type_name: P::type_name(),
            inner: Box::new(instance),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Recover the concrete instance, handing the object back on mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Object> {
        let type_name = self.type_name;
        self.inner
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|inner| Object { type_name, inner })
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.type_name).finish()
    }
}

/// Rust types that can be prompted for and rebuilt from a [`Value`].
///
/// Non-`Option` primitives map to [`TypeDescriptor::Primitive`] and are
/// therefore never absent; wrapping any type in `Option` makes it nullable.
/// Implement this for a host type with a [`TypeDescriptor::Named`]
/// descriptor and register a prompt for that name to use it inside
/// structural types and lists.
pub trait PromptValue: Sized + 'static {
    /// Whether an absent answer converts to a value of this type.
    const NULLABLE: bool = false;

    fn descriptor() -> TypeDescriptor;

    fn from_value(value: Value) -> PromptResult<Self>;

    /// Convert a possibly absent answer.
    fn from_answer(answer: Option<Value>) -> PromptResult<Self> {
        match answer {
            Some(value) => Self::from_value(value),
            None => Err(PromptError::answer_invalid(DEFINITE_ANSWER)),
        }
    }
}

/// A prompt produced a value of the wrong shape for the requested type.
pub(crate) fn shape_mismatch(expected: &TypeDescriptor, found: &Value) -> PromptError {
    PromptError::illegal_structure(
        expected.to_string(),
        format!("prompt produced a {} value", found.kind_name()),
    )
}

macro_rules! primitive_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl PromptValue for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::Primitive(PrimitiveKind::$kind)
                }

                fn from_value(value: Value) -> PromptResult<Self> {
                    match value {
                        Value::$kind(inner) => Ok(inner),
                        other => Err(shape_mismatch(&Self::descriptor(), &other)),
                    }
                }
            }
        )*
    };
}

primitive_value!(
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);

impl PromptValue for String {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Text
    }

    fn from_value(value: Value) -> PromptResult<Self> {
        match value {
            Value::Text(text) => Ok(text),
            other => Err(shape_mismatch(&TypeDescriptor::Text, &other)),
        }
    }
}

impl<T: PromptValue> PromptValue for Option<T> {
    const NULLABLE: bool = true;

    fn descriptor() -> TypeDescriptor {
        T::descriptor().boxed()
    }

    fn from_value(value: Value) -> PromptResult<Self> {
        T::from_value(value).map(Some)
    }

    fn from_answer(answer: Option<Value>) -> PromptResult<Self> {
        answer.map(T::from_value).transpose()
    }
}

impl<T: PromptValue> PromptValue for Vec<T> {
    // Elements are read in optional mode: an empty line ends the list
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::list_of(T::descriptor().boxed())
    }

    fn from_value(value: Value) -> PromptResult<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(shape_mismatch(&Self::descriptor(), &other)),
        }
    }
}

impl<P: Promptable> PromptValue for P {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::structural::<P>()
    }

    fn from_value(value: Value) -> PromptResult<Self> {
        match value {
            Value::Object(object) => object.downcast::<P>().map_err(|object| {
                PromptError::illegal_structure(
                    P::type_name(),
                    format!("received an instance of {}", object.type_name()),
                )
            }),
            other => Err(shape_mismatch(&Self::descriptor(), &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_descriptors() {
        assert_eq!(i32::descriptor(), TypeDescriptor::Primitive(PrimitiveKind::I32));
        assert_eq!(
            Option::<i32>::descriptor(),
            TypeDescriptor::Boxed(PrimitiveKind::I32)
        );
        assert_eq!(Option::<String>::descriptor(), TypeDescriptor::Text);
        assert_eq!(
            Vec::<u8>::descriptor(),
            TypeDescriptor::list_of(TypeDescriptor::Boxed(PrimitiveKind::U8))
        );
    }

    #[test]
    fn test_absent_answers() {
        assert_eq!(Option::<bool>::from_answer(None).unwrap(), None);
        let err = bool::from_answer(None).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), DEFINITE_ANSWER);
    }

    #[test]
    fn test_list_conversion() {
        let value = Value::List(vec![Value::I64(3), Value::I64(-4)]);
        assert_eq!(Vec::<i64>::from_value(value).unwrap(), vec![3, -4]);
    }

    #[test]
    fn test_shape_mismatch_is_fatal() {
        let err = i16::from_value(Value::Text("7".to_string())).unwrap_err();
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("text value"));
    }
}
