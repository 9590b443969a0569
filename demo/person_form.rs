//! Interactive form for a person record.
//!
//! Run with `cargo run --example person_form`. Settings are read from
//! `.prompter/settings.toml` and `PROMPTER_*` environment variables.

use prompter::{
    PromptError, PromptResult, Promptable, Registry, Schema, Settings, TypeDescriptor, Value,
};

#[derive(Default, Debug)]
struct Address {
    street: Option<String>,
    city: String,
}

impl Promptable for Address {
    fn describe(schema: &mut Schema<Self>) {
        schema.property("street", |a: &mut Address, v: Option<String>| {
            a.street = v;
            Ok(())
        });
        schema.property("city", |a: &mut Address, v: String| {
            a.city = v;
            Ok(())
        });
    }
}

#[derive(Debug)]
struct Email(String);

impl prompter::PromptValue for Email {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::named("email")
    }

    fn from_value(value: Value) -> PromptResult<Self> {
        match value {
            Value::Text(text) => Ok(Email(text)),
            other => Err(PromptError::illegal_structure("email", other.kind_name())),
        }
    }
}

#[derive(Default, Debug)]
struct Person {
    first_name: String,
    last_name: Option<String>,
    age: u8,
    email: Option<Email>,
    phones: Vec<String>,
    address: Option<Address>,
}

impl Promptable for Person {
    fn describe(schema: &mut Schema<Self>) {
        schema.property("firstName", |p: &mut Person, v: String| {
            p.first_name = v;
            Ok(())
        });
        schema.property("lastName", |p: &mut Person, v: Option<String>| {
            p.last_name = v;
            Ok(())
        });
        schema
            .property("age", |p: &mut Person, v: u8| {
                if v > 150 {
                    return Err(format!("{v} is not a plausible age"));
                }
                p.age = v;
                Ok(())
            })
            .message("How old are you? ");
        schema.property("email", |p: &mut Person, v: Option<Email>| {
            p.email = v;
            Ok(())
        });
        schema
            .property("phones", |p: &mut Person, v: Option<Vec<String>>| {
                p.phones = v.unwrap_or_default();
                Ok(())
            })
            .message("Phone numbers:");
        schema.property("address", |p: &mut Person, v: Option<Address>| {
            p.address = v;
            Ok(())
        });
    }
}

fn parse_email(answer: &str) -> PromptResult<Value> {
    match answer.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => {
            Ok(Value::Text(answer.to_string()))
        }
        _ => Err(PromptError::answer_invalid(format!(
            "{answer} is not an email address"
        ))),
    }
}

fn main() {
    let settings = Settings::load().unwrap_or_else(|err| {
        eprintln!("Warning: using default settings: {err}");
        Settings::default()
    });
    prompter::logging::init_with_config(&settings.logging);
    Registry::install_global(settings);

    let registry = Registry::global();
    registry.register_parser(TypeDescriptor::named("email"), parse_email);

    let mut session = prompter::Session::stdio();
    match session.ask::<Option<Person>>() {
        Ok(Some(person)) => println!("{person:#?}"),
        Ok(None) => println!("Skipped."),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
