mod container;
mod external;
mod registry;

pub use container::{Container, Context};
pub use external::{Invocation, Render};
pub use registry::{Lookup, Registry};

pub(crate) use external::Collector;

use crate::{
    compile::{
        parse,
        tree::{Section, Tree},
        Document, Scope,
    },
    log::{
        error_nested_template, error_outside_container, error_unknown_kind,
        error_unnamed, error_unnamed_template, Error,
    },
};
use serde_json::{Map, Value};

/// Parse and render the given text.
///
/// Provides a shortcut to quickly render text when the parsed [`Document`]
/// is not needed again. Each template invocation is passed to the engine.
///
/// # Errors
///
/// Returns an [`Error`] if parsing fails, the tree breaks a placement rule,
/// or the engine fails.
///
/// # Examples
///
/// ```
/// use weft::{render, Error};
/// use serde_json::{Map, Value};
///
/// let engine = |_: &str, data: &Map<String, Value>| -> Result<String, Error> {
///     Ok(format!("<span class=\"fa fa-{}\"></span>", data["which"].as_str().unwrap_or_default()))
/// };
///
/// let output = render("{{#template icon}} {{#var which}}tree{{/var}} {{/template}}", &engine);
/// assert_eq!(output.unwrap(), "<span class=\"fa fa-tree\"></span>");
/// ```
pub fn render<R>(text: &str, engine: &R) -> Result<String, Error>
where
    R: Render + ?Sized,
{
    parse(text)?.render(engine)
}

/// Walks the token tree of a [`Document`], extracting data for each template
/// invocation and splicing the text the engine returns into the output.
pub struct Renderer<'render, 'source, R: ?Sized> {
    /// The document being rendered.
    document: &'render Document<'source>,
    /// The engine each template invocation is passed to.
    engine: &'render R,
}

impl<'render, 'source, R> Renderer<'render, 'source, R>
where
    R: Render + ?Sized,
{
    /// Create a new Renderer.
    #[inline]
    pub fn new(document: &'render Document<'source>, engine: &'render R) -> Self {
        Self { document, engine }
    }

    /// Render the [`Document`] stored inside the [`Renderer`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if walking any of the [`Tree`] instances within the
    /// `Document` fails.
    pub fn render(&self) -> Result<String, Error> {
        let mut buffer = String::with_capacity(self.document.source().len());
        self.walk(self.document.scope(), &mut Container::Text(&mut buffer))?;

        Ok(buffer)
    }

    /// Walk a [`Scope`] into the given [`Container`].
    fn walk(&self, scope: &Scope<'source>, into: &mut Container) -> Result<(), Error> {
        for tree in scope.iter() {
            match tree {
                Tree::Static(text) => {
                    if let Container::Text(buffer) = into {
                        buffer.push_str(text.text);
                    }
                }
                Tree::Var(section) => {
                    let mut text = String::new();
                    self.walk(&section.scope, &mut Container::Text(&mut text))?;
                    self.place(section, Value::String(text), into)?;
                }
                Tree::List(section) => {
                    let mut list = vec![];
                    self.walk(&section.scope, &mut Container::List(&mut list))?;
                    self.place(section, Value::Array(list), into)?;
                }
                Tree::Object(section) => {
                    let mut map = Map::new();
                    self.walk(&section.scope, &mut Container::Object(&mut map))?;
                    self.place(section, Value::Object(map), into)?;
                }
                Tree::Template(section) => self.invoke(section, into)?,
                Tree::Section(section) => {
                    return Err(error_unknown_kind(
                        self.document.source(),
                        section.region,
                        section.word,
                    ))
                }
                Tree::Etag(_)
                | Tree::Utag(_)
                | Tree::Partial(_)
                | Tree::DelimiterChange(_)
                | Tree::InvertedSection(_) => {}
            }
        }

        Ok(())
    }

    /// Place the value of a `var`, `list` or `object` into the parent
    /// [`Container`].
    fn place(&self, section: &Section, value: Value, into: &mut Container) -> Result<(), Error> {
        let source = self.document.source();

        match into {
            Container::Text(_) => Err(error_outside_container(
                source,
                section.region,
                section.content,
            )),
            Container::List(list) => {
                if let Some(name) = section.name {
                    ::log::warn!(
                        "ignoring name `{name}` for a list item, place `#{}` inside \
                        a template or object to name it",
                        section.content
                    );
                }
                list.push(value);

                Ok(())
            }
            Container::Object(map) | Container::Template(map) => {
                let name = section
                    .name
                    .ok_or_else(|| error_unnamed(source, section.region, section.content))?;
                map.insert(name.to_string(), value);

                Ok(())
            }
        }
    }

    /// Extract the data of a `template` section and splice the text returned
    /// by the engine into the parent.
    fn invoke(&self, section: &Section<'source>, into: &mut Container) -> Result<(), Error> {
        let source = self.document.source();

        let mut data = Map::new();
        self.walk(&section.scope, &mut Container::Template(&mut data))?;

        let buffer = match into {
            Container::Text(buffer) => buffer,
            other => {
                return Err(error_nested_template(
                    source,
                    section.region,
                    section.content,
                    &other.context().to_string(),
                ))
            }
        };

        let name = section
            .name
            .ok_or_else(|| error_unnamed_template(source, section.region))?;

        ::log::debug!("rendering template `{name}` with {} value(s)", data.len());

        let text = self.engine.render(name, &data).map_err(|error| {
            if error.has_visual() {
                error
            } else {
                error.with_pointer(source, section.region)
            }
        })?;
        buffer.push_str(&text);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::log::{Error, ErrorKind};
    use serde_json::{json, Map, Value};

    fn echo(name: &str, data: &Map<String, Value>) -> Result<String, Error> {
        Ok(format!("[{name} {}]", Value::Object(data.clone())))
    }

    #[test]
    fn test_render_static() {
        assert_eq!(render("<p>hello</p>", &echo), Ok("<p>hello</p>".to_string()));
        assert_eq!(render("", &echo), Ok(String::new()));
    }

    #[test]
    fn test_render_leaf_tags_are_silent() {
        let text = "a{{ b }}{{{ c }}}{{> d }}{{^e}}f{{/e}}{{! g }}h";
        assert_eq!(render(text, &echo), Ok("ah".to_string()));
    }

    #[test]
    fn test_render_template_data() {
        let text = "{{#template t}}\
            {{#var a}}x {{#template u}}{{/template}}y{{/var}}\
            {{#list items}}{{#var}}1{{/var}}{{#object}}{{#var k}}v{{/var}}{{/object}}{{/list}}\
            {{#object o}}{{#list l}}{{/list}}{{/object}}\
            {{/template}}";

        let engine = |name: &str, data: &Map<String, Value>| -> Result<String, Error> {
            match name {
                "u" => Ok("U".to_string()),
                _ => Ok(Value::Object(data.clone()).to_string()),
            }
        };

        let output: Value = serde_json::from_str(&render(text, &engine).unwrap()).unwrap();
        assert_eq!(
            output,
            json!({
                "a": "x Uy",
                "items": ["1", {"k": "v"}],
                "o": {"l": []}
            })
        );
    }

    #[test]
    fn test_render_last_write_wins() {
        let text = "{{#template t}}{{#var a}}1{{/var}}{{#var a}}2{{/var}}{{/template}}";
        assert_eq!(render(text, &echo), Ok("[t {\"a\":\"2\"}]".to_string()));
    }

    #[test]
    fn test_render_static_discarded_outside_text() {
        let text = "{{#template t}} \n {{#list l}} x {{/list}} {{/template}}";
        assert_eq!(render(text, &echo), Ok("[t {\"l\":[]}]".to_string()));
    }

    #[test]
    fn test_render_named_list_child() {
        let text = "{{#template t}}{{#list l}}{{#var ignored}}a{{/var}}{{/list}}{{/template}}";
        assert_eq!(render(text, &echo), Ok("[t {\"l\":[\"a\"]}]".to_string()));
    }

    #[test]
    fn test_error_var_outside_container() {
        let error = render("{{#var x}}a{{/var}}", &echo).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MisplacedStructuralNode);
    }

    #[test]
    fn test_error_template_in_list() {
        let text = "{{#template t}}{{#list l}}{{#template u}}{{/template}}{{/list}}{{/template}}";
        let error = render(text, &echo).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::MisplacedStructuralNode);
        assert!(error.reason().contains("list"));
    }

    #[test]
    fn test_error_template_in_object() {
        let text = "{{#template t}}{{#object o}}{{#template u}}{{/template}}{{/object}}{{/template}}";
        let error = render(text, &echo).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::MisplacedStructuralNode);
        assert!(error.reason().contains("object"));
    }

    #[test]
    fn test_error_unnamed() {
        let text = "{{#template t}}{{#object}}{{/object}}{{/template}}";
        let error = render(text, &echo).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingBoundName);

        let error = render("{{#template}}{{/template}}", &echo).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingBoundName);
    }

    #[test]
    fn test_error_unknown_kind() {
        let error = render("{{#nav}}{{/nav}}", &echo).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownStructuralKind);
    }

    #[test]
    fn test_error_external_gets_pointer() {
        let engine = |_: &str, _: &Map<String, Value>| -> Result<String, Error> {
            Err(Error::build("boom"))
        };
        let error = render("a\n{{#template t}}{{/template}}", &engine).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::External);
        assert!(error.has_visual());
        assert!(format!("{error:#}").contains("2:1"));
    }
}
