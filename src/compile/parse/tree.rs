use crate::{compile::Scope, region::Region};

/// The token tree produced by a [`Parser`][`crate::Parser`].
#[derive(Debug, Clone, PartialEq)]
pub enum Tree<'source> {
    /// Literal text between tags.
    Static(Static<'source>),
    /// An escaped variable reference, `{{ name }}`.
    Etag(Tag<'source>),
    /// An unescaped variable reference, `{{{ name }}}` or `{{& name }}`.
    Utag(Tag<'source>),
    /// A partial reference, `{{> name }}` or `{{< name }}`.
    Partial(Tag<'source>),
    /// A delimiter change, `{{=<% %>=}}`.
    DelimiterChange(Tag<'source>),
    /// A string value, `{{#var name}}...{{/var}}`.
    Var(Section<'source>),
    /// An ordered sequence of values, `{{#list name}}...{{/list}}`.
    List(Section<'source>),
    /// A keyed mapping of values, `{{#object name}}...{{/object}}`.
    Object(Section<'source>),
    /// A sub-template invocation, `{{#template icon}}...{{/template}}`.
    Template(Section<'source>),
    /// A section with any other kind word, such as `{{#nav}}...{{/nav}}`.
    Section(Section<'source>),
    /// An inverted section, `{{^name}}...{{/name}}`.
    InvertedSection(Section<'source>),
}

impl<'source> Tree<'source> {
    /// Return the name of the kind of this Tree.
    pub fn kind(&self) -> &'static str {
        match self {
            Tree::Static(_) => "static",
            Tree::Etag(_) => "etag",
            Tree::Utag(_) => "utag",
            Tree::Partial(_) => "partial",
            Tree::DelimiterChange(_) => "delimiter_change",
            Tree::Var(_) => "var",
            Tree::List(_) => "list",
            Tree::Object(_) => "object",
            Tree::Template(_) => "template",
            Tree::Section(_) => "section",
            Tree::InvertedSection(_) => "inverted_section",
        }
    }

    /// Get the Region this Tree was read from.
    ///
    /// For a section, this is the Region of its open tag.
    pub fn get_region(&self) -> Region {
        match self {
            Tree::Static(text) => text.region,
            Tree::Etag(tag) | Tree::Utag(tag) | Tree::Partial(tag) | Tree::DelimiterChange(tag) => {
                tag.region
            }
            Tree::Var(section)
            | Tree::List(section)
            | Tree::Object(section)
            | Tree::Template(section)
            | Tree::Section(section)
            | Tree::InvertedSection(section) => section.region,
        }
    }

    /// Return the Section behind this Tree, if it is one.
    pub fn as_section(&self) -> Option<&Section<'source>> {
        match self {
            Tree::Var(section)
            | Tree::List(section)
            | Tree::Object(section)
            | Tree::Template(section)
            | Tree::Section(section)
            | Tree::InvertedSection(section) => Some(section),
            _ => None,
        }
    }
}

/// Literal text, preserved exactly as it appears in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Static<'source> {
    pub text: &'source str,
    pub region: Region,
}

impl Static<'_> {
    /// Return the UTF-8 bytes of the text.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// A tag without children.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag<'source> {
    /// Trimmed interior of the tag, without the sigil.
    pub content: &'source str,
    /// Region of the whole tag, delimiters included.
    pub region: Region,
}

/// A section enclosed by an open and a close tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'source> {
    /// The first word of the content, which the close tag must repeat.
    pub word: &'source str,
    /// The second word of the content.
    ///
    /// Names the value in a parent object or template, or for a template
    /// section, the template to render.
    pub name: Option<&'source str>,
    /// Trimmed interior of the open tag, such as `var heading`.
    pub content: &'source str,
    /// Source text between the open and close tag, comments removed.
    pub source: String,
    /// Children between the open and close tag.
    pub scope: Scope<'source>,
    /// Region of the open tag.
    pub region: Region,
}
