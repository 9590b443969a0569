//! Type descriptors used as registry keys.
//!
//! A [`TypeDescriptor`] names the shape of a requested value: a primitive
//! kind (nullable or not), text, a list of some element type, a structural
//! [`Promptable`](crate::Promptable) type, or an opaque host-defined name.

mod value;

pub use value::{Object, PromptValue, Value};
pub(crate) use value::{DEFINITE_ANSWER, shape_mismatch};

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::PromptResult;
use crate::prompts::{Prompt, StructuralPrompt};
use crate::promptable::Promptable;

/// Fixed-width scalar kinds with a built-in line parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl PrimitiveKind {
    /// Every kind, in the order the registry seeds them.
    pub const ALL: [PrimitiveKind; 12] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Char,
        PrimitiveKind::I8,
        PrimitiveKind::I16,
        PrimitiveKind::I32,
        PrimitiveKind::I64,
        PrimitiveKind::U8,
        PrimitiveKind::U16,
        PrimitiveKind::U32,
        PrimitiveKind::U64,
        PrimitiveKind::F32,
        PrimitiveKind::F64,
    ];

    /// Human-readable name used in default prompt messages.
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "boolean",
            PrimitiveKind::Char => "character",
            PrimitiveKind::I8 => "byte",
            PrimitiveKind::I16 => "short",
            PrimitiveKind::I32 => "integer",
            PrimitiveKind::I64 => "long",
            PrimitiveKind::U8 => "unsigned byte",
            PrimitiveKind::U16 => "unsigned short",
            PrimitiveKind::U32 => "unsigned integer",
            PrimitiveKind::U64 => "unsigned long",
            PrimitiveKind::F32 => "float",
            PrimitiveKind::F64 => "double",
        }
    }
}

/// Identity of a structural type plus the hook that builds its prompt.
///
/// Equality and hashing use the Rust [`TypeId`] only.
#[derive(Clone, Copy)]
pub struct StructuralType {
    id: TypeId,
    name: &'static str,
    synthesize: fn() -> PromptResult<Arc<dyn Prompt>>,
}

impl StructuralType {
    pub fn of<P: Promptable>() -> Self {
        Self {
            id: TypeId::of::<P>(),
            name: P::type_name(),
            synthesize: StructuralPrompt::<P>::synthesize,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Introspect the type and build its structural prompt.
    pub(crate) fn synthesize(&self) -> PromptResult<Arc<dyn Prompt>> {
        (self.synthesize)()
    }
}

impl PartialEq for StructuralType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StructuralType {}

impl Hash for StructuralType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for StructuralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StructuralType").field(&self.name).finish()
    }
}

/// Key under which the registry caches a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A line of text.
    Text,
    /// A primitive kind that may be absent.
    Boxed(PrimitiveKind),
    /// A primitive slot that can never be absent.
    Primitive(PrimitiveKind),
    /// A sequence of elements of the inner type.
    List(Box<TypeDescriptor>),
    /// A type implementing [`Promptable`].
    Structural(StructuralType),
    /// A host-defined type, resolvable only through explicit registration.
    Named(Cow<'static, str>),
}

impl TypeDescriptor {
    /// Descriptor of a list whose elements are of `element` type.
    pub fn list_of(element: TypeDescriptor) -> Self {
        TypeDescriptor::List(Box::new(element))
    }

    /// Descriptor of a host-defined type.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        TypeDescriptor::Named(name.into())
    }

    pub fn structural<P: Promptable>() -> Self {
        TypeDescriptor::Structural(StructuralType::of::<P>())
    }

    /// The nullable counterpart: `Primitive(k)` becomes `Boxed(k)`.
    pub fn boxed(self) -> Self {
        match self {
            TypeDescriptor::Primitive(kind) => TypeDescriptor::Boxed(kind),
            other => other,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(_))
    }

    /// Element type when this is a list.
    pub fn element(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::List(element) => Some(element),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Text => f.write_str("text"),
            TypeDescriptor::Boxed(kind) | TypeDescriptor::Primitive(kind) => {
                f.write_str(kind.name())
            }
            TypeDescriptor::List(element) => write!(f, "{element} list"),
            TypeDescriptor::Structural(structural) => f.write_str(structural.name()),
            TypeDescriptor::Named(name) => f.write_str(name),
        }
    }
}
