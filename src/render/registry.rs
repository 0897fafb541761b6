use crate::{
    log::{error_missing_template, error_unreachable_name, Error},
    render::Render,
};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Provides storage for the source text of templates that a document may
/// invoke by name.
///
/// A Registry is bound to an engine with [`engine`][`Registry::engine`], and
/// the result is passed to each render explicitly.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    templates: HashMap<String, String>,
}

impl Registry {
    /// Create a new [`Registry`].
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Registry;
    ///
    /// let registry = Registry::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Inserts a template into the [`Registry`], returning the source text it
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains whitespace, since no
    /// `template` section could ever refer to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Registry;
    ///
    /// let mut registry = Registry::new();
    /// let result = registry.insert("icon", "<span class=\"fa fa-{{which}}\"></span>");
    ///
    /// assert_eq!(result, Ok(None));
    /// ```
    pub fn insert<S, T>(&mut self, name: S, source: T) -> Result<Option<String>, Error>
    where
        S: Into<String>,
        T: Into<String>,
    {
        let name = name.into();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(error_unreachable_name(&name));
        }

        Ok(self.templates.insert(name, source.into()))
    }

    /// Inserts a template into the [`Registry`].
    ///
    /// # Panics
    ///
    /// Panics if the name is empty or contains whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Registry;
    ///
    /// let mut registry = Registry::new();
    /// registry.insert_must("icon", "<span class=\"fa fa-{{which}}\"></span>");
    /// ```
    #[inline]
    pub fn insert_must<S, T>(&mut self, name: S, source: T)
    where
        S: Into<String>,
        T: Into<String>,
    {
        if let Err(error) = self.insert(name, source) {
            panic!("{error}");
        }
    }

    /// Inserts a template into the [`Registry`].
    ///
    /// Returns the `Registry`, so additional methods may be chained.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Registry;
    ///
    /// let registry = Registry::new().with("icon", "<i></i>");
    ///
    /// assert!(registry.is_ok());
    /// ```
    #[inline]
    pub fn with<S, T>(mut self, name: S, source: T) -> Result<Self, Error>
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.insert(name, source)?;

        Ok(self)
    }

    /// Inserts a template into the [`Registry`].
    ///
    /// Returns the `Registry`, so additional methods may be chained.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty or contains whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Registry;
    ///
    /// let registry = Registry::new()
    ///     .with_must("icon", "<i></i>")
    ///     .with_must("card", "<div></div>");
    /// ```
    #[inline]
    pub fn with_must<S, T>(mut self, name: S, source: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.insert_must(name, source);

        self
    }

    /// Returns the source text of the named template, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Registry;
    ///
    /// let registry = Registry::new().with_must("icon", "<i></i>");
    ///
    /// assert_eq!(registry.get("icon"), Some("<i></i>"));
    /// assert_eq!(registry.get("card"), None);
    /// ```
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// Bind the [`Registry`] to an engine that renders template source text.
    ///
    /// The returned [`Lookup`] implements [`Render`], resolving each template
    /// name through the `Registry` before calling the engine.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::{render, Error, Registry};
    /// use serde_json::{Map, Value};
    ///
    /// let registry = Registry::new().with_must("shout", "HELLO");
    /// let lookup = registry.engine(|source: &str, _: &Map<String, Value>| -> Result<String, Error> {
    ///     Ok(source.to_string())
    /// });
    ///
    /// let output = render("<p>{{#template shout}}{{/template}}</p>", &lookup);
    /// assert_eq!(output.unwrap(), "<p>HELLO</p>");
    /// ```
    pub fn engine<F>(&self, engine: F) -> Lookup<'_, F>
    where
        F: Fn(&str, &Map<String, Value>) -> Result<String, Error>,
    {
        Lookup {
            registry: self,
            engine,
        }
    }
}

/// A [`Registry`] bound to an engine.
pub struct Lookup<'registry, F> {
    registry: &'registry Registry,
    engine: F,
}

impl<F> Render for Lookup<'_, F>
where
    F: Fn(&str, &Map<String, Value>) -> Result<String, Error>,
{
    fn render(&self, name: &str, data: &Map<String, Value>) -> Result<String, Error> {
        let source = self
            .registry
            .get(name)
            .ok_or_else(|| error_missing_template(name))?;

        (self.engine)(source, data)
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;
    use crate::{log::ErrorKind, render::Render};
    use serde_json::{Map, Value};

    #[test]
    fn test_insert_replaces() {
        let mut registry = Registry::new();

        assert_eq!(registry.insert("icon", "a"), Ok(None));
        assert_eq!(registry.insert("icon", "b"), Ok(Some("a".to_string())));
        assert_eq!(registry.get("icon"), Some("b"));
    }

    #[test]
    fn test_insert_unreachable_name() {
        let mut registry = Registry::new();

        assert!(registry.insert("", "a").is_err());
        assert!(registry.insert("two words", "a").is_err());
        assert_eq!(registry.get(""), None);
    }

    #[test]
    #[should_panic]
    fn test_insert_must_panics() {
        Registry::new().insert_must("two words", "a");
    }

    #[test]
    fn test_lookup_missing_template() {
        let registry = Registry::new();
        let lookup = registry.engine(|source: &str, _: &Map<String, Value>| Ok(source.to_string()));

        let error = lookup.render("icon", &Map::new()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingTemplate);
    }

    #[test]
    fn test_lookup_passes_source() {
        let registry = Registry::new().with_must("icon", "<i></i>");
        let lookup = registry.engine(|source: &str, _: &Map<String, Value>| Ok(source.to_string()));

        assert_eq!(lookup.render("icon", &Map::new()), Ok("<i></i>".to_string()));
    }
}
