//! Common utilities shared across modules.

/// Split a property name into lowercase words.
///
/// Handles camelCase as well as snake_case and kebab-case names:
/// `firstName`, `first_name` and `first-name` all become `first name`.
pub fn human_readable_name(name: &str) -> String {
    let mut words = String::with_capacity(name.len() + 4);
    let mut previous: Option<char> = None;

    for c in name.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !words.is_empty() && !words.ends_with(' ') {
                words.push(' ');
            }
            previous = None;
            continue;
        }
        let boundary = c.is_uppercase() && previous.is_some_and(|p| !p.is_uppercase());
        if boundary && !words.ends_with(' ') {
            words.push(' ');
        }
        words.extend(c.to_lowercase());
        previous = Some(c);
    }

    words.trim_end().to_string()
}

/// Last path segment of a Rust type name, generics stripped.
///
/// `my_app::forms::Person` becomes `Person`.
pub fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
