use serde_json::{Map, Value};
use std::fmt::Display;

/// The kind of value a scope is being walked into.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Context {
    /// Plain text, either the document itself or the body of a `var`.
    Text,
    /// The body of a `list`.
    List,
    /// The body of an `object`.
    Object,
    /// The body of a `template`.
    Template,
}

impl Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Context::Text => write!(f, "text"),
            Context::List => write!(f, "list"),
            Context::Object => write!(f, "object"),
            Context::Template => write!(f, "template"),
        }
    }
}

/// Borrows the storage a walk writes into.
///
/// The variant decides the [`Context`] of the walk.
#[derive(Debug, PartialEq)]
pub enum Container<'walk> {
    Text(&'walk mut String),
    List(&'walk mut Vec<Value>),
    Object(&'walk mut Map<String, Value>),
    Template(&'walk mut Map<String, Value>),
}

impl Container<'_> {
    /// Return the Context this Container is walked under.
    pub fn context(&self) -> Context {
        match self {
            Container::Text(_) => Context::Text,
            Container::List(_) => Context::List,
            Container::Object(_) => Context::Object,
            Container::Template(_) => Context::Template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Container, Context};
    use serde_json::Map;

    #[test]
    fn test_container_context() {
        let (mut text, mut list, mut object, mut template) =
            (String::new(), vec![], Map::new(), Map::new());

        assert_eq!(Container::Text(&mut text).context(), Context::Text);
        assert_eq!(Container::List(&mut list).context(), Context::List);
        assert_eq!(Container::Object(&mut object).context(), Context::Object);
        assert_eq!(Container::Template(&mut template).context(), Context::Template);
    }

    #[test]
    fn test_context_display() {
        assert_eq!(Context::List.to_string(), "list");
        assert_eq!(Context::Object.to_string(), "object");
    }
}
