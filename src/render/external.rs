//! Contains the [`Render`] trait, which connects a template invocation to the
//! engine that produces its text.
//!
//! Any struct that implements [`Render`], or closure matching the
//! [`render`][`Render::render`] method, can be passed to
//! [`render`][`crate::render()`].
//!
//! ## Examples
//!
//! ```
//! use weft::{render, Error};
//! use serde_json::{Map, Value};
//!
//! let engine = |name: &str, data: &Map<String, Value>| -> Result<String, Error> {
//!     match data.get("which").and_then(Value::as_str) {
//!         Some(which) => Ok(format!("<i class=\"{name}-{which}\"></i>")),
//!         None => Err(Error::build("missing `which`")),
//!     }
//! };
//!
//! let output = render("{{#template fa}}{{#var which}}tree{{/var}}{{/template}}", &engine);
//! assert_eq!(output.unwrap(), "<i class=\"fa-tree\"></i>");
//! ```
use crate::log::Error;
use serde::Serialize;
use serde_json::{Map, Value};
use std::cell::RefCell;

/// Produces the text of a named template from the data extracted for it.
pub trait Render {
    /// Render the template with the given name and data.
    ///
    /// # Errors
    ///
    /// May return an [`Error`] to abort rendering.
    fn render(&self, name: &str, data: &Map<String, Value>) -> Result<String, Error>;
}

impl<F> Render for F
where
    F: Fn(&str, &Map<String, Value>) -> Result<String, Error>,
{
    fn render(&self, name: &str, data: &Map<String, Value>) -> Result<String, Error> {
        self(name, data)
    }
}

/// A template invocation found while extracting data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invocation {
    /// The name of the template.
    pub name: String,
    /// The data extracted for the template.
    pub data: Map<String, Value>,
}

/// A [`Render`] that records each invocation and returns empty text.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    invocations: RefCell<Vec<Invocation>>,
}

impl Collector {
    /// Create a new Collector.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the recorded invocations, in the order they were made.
    pub fn finish(self) -> Vec<Invocation> {
        self.invocations.into_inner()
    }
}

impl Render for Collector {
    fn render(&self, name: &str, data: &Map<String, Value>) -> Result<String, Error> {
        self.invocations.borrow_mut().push(Invocation {
            name: name.to_string(),
            data: data.clone(),
        });

        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::{Collector, Invocation, Render};
    use crate::log::Error;
    use serde_json::{json, Map, Value};

    #[test]
    fn test_closure_render() {
        let engine = |name: &str, _: &Map<String, Value>| -> Result<String, Error> {
            Ok(name.to_uppercase())
        };
        assert_eq!(engine.render("icon", &Map::new()), Ok("ICON".to_string()));
    }

    #[test]
    fn test_collector_records_in_order() {
        let collector = Collector::new();
        let mut data = Map::new();
        data.insert("which".into(), json!("tree"));

        assert_eq!(collector.render("a", &data), Ok(String::new()));
        assert_eq!(collector.render("b", &Map::new()), Ok(String::new()));

        assert_eq!(
            collector.finish(),
            vec![
                Invocation {
                    name: "a".into(),
                    data
                },
                Invocation {
                    name: "b".into(),
                    data: Map::new()
                },
            ]
        );
    }

    #[test]
    fn test_invocation_serialize() {
        let invocation = Invocation {
            name: "icon".into(),
            data: Map::new(),
        };

        assert_eq!(
            serde_json::to_value(invocation).unwrap(),
            json!({"name": "icon", "data": {}})
        );
    }
}
