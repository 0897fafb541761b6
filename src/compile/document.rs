use crate::{
    compile::Scope,
    log::Error,
    render::{Collector, Invocation, Render, Renderer},
};

/// A compiled token tree, along with the source text it was read from.
///
/// A Document is immutable and can be walked any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'source> {
    source: &'source str,
    partials: Vec<&'source str>,
    scope: Scope<'source>,
}

impl<'source> Document<'source> {
    /// Create a new Document from its parts.
    #[inline]
    pub(crate) fn new(
        source: &'source str,
        partials: Vec<&'source str>,
        scope: Scope<'source>,
    ) -> Self {
        Self {
            source,
            partials,
            scope,
        }
    }

    /// Return the source text of the Document.
    #[inline]
    pub fn source(&self) -> &'source str {
        self.source
    }

    /// Return the names of every partial reference, in source order and with
    /// duplicates preserved.
    #[inline]
    pub fn partials(&self) -> &[&'source str] {
        &self.partials
    }

    /// Return the top level Scope of the token tree.
    #[inline]
    pub fn scope(&self) -> &Scope<'source> {
        &self.scope
    }

    /// Render the Document, using the given engine for each template
    /// invocation.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the tree breaks a placement rule or the
    /// engine fails.
    pub fn render<R>(&self, engine: &R) -> Result<String, Error>
    where
        R: Render + ?Sized,
    {
        Renderer::new(self, engine).render()
    }

    /// Extract the data passed to each template invocation without rendering
    /// anything.
    ///
    /// Invocations are returned in the order rendering would make them, so an
    /// invocation nested inside the data of another comes first.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the tree breaks a placement rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::parse;
    ///
    /// let document = parse("{{#template icon}}{{#var which}}tree{{/var}}{{/template}}").unwrap();
    /// let invocations = document.extract().unwrap();
    ///
    /// assert_eq!(invocations[0].name, "icon");
    /// assert_eq!(invocations[0].data["which"], "tree");
    /// ```
    pub fn extract(&self) -> Result<Vec<Invocation>, Error> {
        let collector = Collector::new();
        Renderer::new(self, &collector).render()?;

        Ok(collector.finish())
    }

    /// Check the tree against every placement rule without invoking an
    /// engine.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error`] found.
    pub fn validate(&self) -> Result<(), Error> {
        self.extract().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use crate::{compile::parse, log::ErrorKind};

    #[test]
    fn test_document_accessors() {
        let text = "a{{> header }}b";
        let document = parse(text).unwrap();

        assert_eq!(document.source(), text);
        assert_eq!(document.partials(), &["header"]);
        assert_eq!(document.scope().data.len(), 3);
    }

    #[test]
    fn test_validate() {
        assert!(parse("{{#template a}}{{/template}}").unwrap().validate().is_ok());

        let error = parse("{{#var a}}{{/var}}").unwrap().validate().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MisplacedStructuralNode);
    }

    #[test]
    fn test_extract_orders_innermost_first() {
        let text = "{{#template outer}}\
            {{#var body}}{{#template inner}}{{#var x}}1{{/var}}{{/template}}{{/var}}\
            {{/template}}";
        let invocations = parse(text).unwrap().extract().unwrap();
        let names: Vec<_> = invocations.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(names, vec!["inner", "outer"]);
        assert_eq!(invocations[0].data["x"], "1");
        assert_eq!(invocations[1].data["body"], "");
    }
}
