//! Structural types that can be prompted field by field.
//!
//! A [`Promptable`] type describes its settable properties once through a
//! [`Schema`] builder. The registry runs [`Promptable::describe`] the first
//! time the type is requested and caches the resulting property list inside
//! the type's structural prompt.
//!
//! # Example
//!
//! ```
//! use prompter::{Promptable, Schema};
//!
//! #[derive(Default)]
//! struct Person {
//!     first_name: String,
//!     age: Option<u8>,
//! }
//!
//! impl Promptable for Person {
//!     fn describe(schema: &mut Schema<Self>) {
//!         schema.property("firstName", |p: &mut Person, v: String| {
//!             p.first_name = v;
//!             Ok(())
//!         });
//!         schema
//!             .property("age", |p: &mut Person, v: Option<u8>| {
//!                 p.age = v;
//!                 Ok(())
//!             })
//!             .message("How old are you? ");
//!     }
//! }
//! ```
//!
//! # Inheritance
//!
//! [`Schema::extend`] pulls in the declarations of an embedded base type.
//! Declaring a property with a name that already exists replaces the
//! earlier declaration in place, and inherited declarations never replace
//! the type's own. Only the most specific declaration's
//! `ignore`/`message`/`required` settings apply.

mod property;

pub use property::{PropertyDecl, PropertyDescriptor};

use crate::error::{PromptError, PromptResult};
use crate::types::PromptValue;
use crate::utils::short_type_name;

/// A type that can be built by prompting for each of its properties.
pub trait Promptable: Default + Send + 'static {
    /// Declare the settable properties, in prompting order.
    fn describe(schema: &mut Schema<Self>);

    /// Name shown in the default prompt message.
    fn type_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Build the empty instance that properties are written into.
    ///
    /// An error here aborts the acquisition as an illegal structure.
    fn construct() -> Result<Self, String> {
        Ok(Self::default())
    }
}

/// Property declarations of a [`Promptable`] type.
pub struct Schema<P> {
    properties: Vec<PropertyDecl<P>>,
}

impl<P: Promptable> Schema<P> {
    fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    /// Run [`Promptable::describe`] for `P`.
    pub fn describe() -> Self {
        let mut schema = Self::new();
        P::describe(&mut schema);
        schema
    }

    /// Declare a settable property whose value type is the setter's argument.
    ///
    /// A setter returning `Err(reason)` rejects the answer; the user is told
    /// the reason and asked again.
    pub fn property<V, F>(&mut self, name: impl Into<String>, setter: F) -> &mut PropertyDecl<P>
    where
        V: PromptValue,
        F: Fn(&mut P, V) -> Result<(), String> + Send + Sync + 'static,
    {
        self.declare(PropertyDecl::new::<V, F>(name.into(), setter))
    }

    /// Inherit every property declared by the base type `B`.
    ///
    /// Properties this schema already declares take precedence over the
    /// inherited ones, whichever order the calls come in.
    pub fn extend<B: Promptable>(&mut self, project: fn(&mut P) -> &mut B) -> &mut Self {
        for decl in Schema::<B>::describe().properties {
            if self.properties.iter().any(|p| p.name() == decl.name()) {
                continue;
            }
            self.properties.push(decl.project(project));
        }
        self
    }

    fn declare(&mut self, decl: PropertyDecl<P>) -> &mut PropertyDecl<P> {
        let index = match self.properties.iter().position(|p| p.name() == decl.name()) {
            Some(index) => {
                self.properties[index] = decl;
                index
            }
            None => {
                self.properties.push(decl);
                self.properties.len() - 1
            }
        };
        &mut self.properties[index]
    }

    /// Declared property names in order, ignored ones included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Validate the declarations and keep the properties that are prompted.
    pub fn introspect(self) -> PromptResult<Vec<PropertyDescriptor<P>>> {
        let mut retained = Vec::with_capacity(self.properties.len());
        for decl in self.properties {
            if decl.name().trim().is_empty() {
                return Err(PromptError::illegal_structure(
                    P::type_name(),
                    "property declared without a name",
                ));
            }
            if let Some(descriptor) = decl.into_descriptor() {
                retained.push(descriptor);
            }
        }
        Ok(retained)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PrimitiveKind, TypeDescriptor};

    #[derive(Default)]
    struct Account {
        id: u64,
        owner: Option<String>,
        tags: Vec<String>,
    }

    impl Promptable for Account {
        fn describe(schema: &mut Schema<Self>) {
            schema.property("id", |a: &mut Account, v: u64| {
                a.id = v;
                Ok(())
            });
            schema
                .property("ownerName", |a: &mut Account, v: Option<String>| {
                    a.owner = v;
                    Ok(())
                })
                .message("Owner: ");
            schema.property("tags", |a: &mut Account, v: Option<Vec<String>>| {
                a.tags = v.unwrap_or_default();
                Ok(())
            });
        }
    }

    #[derive(Default)]
    struct SavingsAccount {
        account: Account,
        rate: f32,
    }

    fn account_mut(savings: &mut SavingsAccount) -> &mut Account {
        &mut savings.account
    }

    impl Promptable for SavingsAccount {
        fn describe(schema: &mut Schema<Self>) {
            schema.extend(account_mut);
            schema.property("rate", |s: &mut SavingsAccount, v: f32| {
                s.rate = v;
                Ok(())
            });
            // Overrides the inherited declaration, dropping its message
            schema
                .property("ownerName", |s: &mut SavingsAccount, v: Option<String>| {
                    s.account.owner = v;
                    Ok(())
                })
                .ignore();
        }
    }

    #[derive(Default)]
    struct Nameless;

    impl Promptable for Nameless {
        fn describe(schema: &mut Schema<Self>) {
            schema.property(" ", |_: &mut Nameless, _: Option<String>| Ok(()));
        }
    }

    #[test]
    fn test_introspect_properties() {
        let properties = Schema::<Account>::describe().introspect().unwrap();
        assert_eq!(properties.len(), 3);

        assert_eq!(properties[0].name(), "id");
        assert_eq!(
            properties[0].value_type(),
            &TypeDescriptor::Primitive(PrimitiveKind::U64)
        );
        assert!(properties[0].is_required());
        assert_eq!(properties[0].message(), "Input id: ");

        assert_eq!(properties[1].message(), "Owner: ");
        assert!(!properties[1].is_required());

        assert_eq!(
            properties[2].value_type(),
            &TypeDescriptor::list_of(TypeDescriptor::Text)
        );
    }

    #[test]
    fn test_extend_and_override() {
        let schema = Schema::<SavingsAccount>::describe();
        let names: Vec<_> = schema.names().collect();
        // The override keeps the inherited position
        assert_eq!(names, vec!["id", "ownerName", "tags", "rate"]);

        let properties = schema.introspect().unwrap();
        let names: Vec<_> = properties.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["id", "tags", "rate"]);
    }

    #[derive(Default)]
    struct PrivateAccount {
        account: Account,
    }

    fn private_account_mut(private: &mut PrivateAccount) -> &mut Account {
        &mut private.account
    }

    impl Promptable for PrivateAccount {
        fn describe(schema: &mut Schema<Self>) {
            // Declared before the base is pulled in
            schema
                .property("ownerName", |p: &mut PrivateAccount, v: Option<String>| {
                    p.account.owner = v;
                    Ok(())
                })
                .ignore();
            schema
                .property("id", |p: &mut PrivateAccount, v: u64| {
                    p.account.id = v;
                    Ok(())
                })
                .message("Account number: ");
            schema.extend(private_account_mut);
        }
    }

    #[test]
    fn test_own_declarations_win_over_later_extend() {
        let schema = Schema::<PrivateAccount>::describe();
        let names: Vec<_> = schema.names().collect();
        assert_eq!(names, vec!["ownerName", "id", "tags"]);

        let properties = schema.introspect().unwrap();
        let retained: Vec<_> = properties.iter().map(|p| (p.name(), p.message())).collect();
        assert_eq!(
            retained,
            vec![("id", "Account number: "), ("tags", "Input tags: ")]
        );
    }

    #[test]
    fn test_inherited_setter_writes_through_projection() {
        let properties = Schema::<SavingsAccount>::describe().introspect().unwrap();
        let mut savings = SavingsAccount::default();
        properties[0]
            .write(&mut savings, Some(crate::types::Value::U64(7)))
            .unwrap();
        assert_eq!(savings.account.id, 7);
    }

    #[test]
    fn test_blank_property_name_is_illegal() {
        let err = Schema::<Nameless>::describe().introspect().unwrap_err();
        assert!(matches!(err, PromptError::IllegalStructure { .. }));
    }
}
