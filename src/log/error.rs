use super::{Pointer, RED, RESET};
use crate::{log::Visual, region::Region};
use std::fmt::{Debug, Display, Formatter, Result};

/// The stage of the pipeline an [`Error`] belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    /// Raised while turning source text into a token tree.
    Parse,
    /// Raised while walking a token tree.
    Render,
}

/// Classifies an [`Error`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// A configured delimiter is empty or contains whitespace.
    InvalidDelimiters,
    /// An open delimiter has no reachable close delimiter.
    UnclosedTag,
    /// The input ended while a section was still open.
    UnclosedSection,
    /// A close tag does not match the open section, or nothing is open.
    UnmatchedClose,
    /// An `object` or `template` child, or a `template` itself, has no name.
    MissingBoundName,
    /// A structural node was placed under a parent that may not hold it.
    MisplacedStructuralNode,
    /// A section kind word is not `var`, `list`, `object` or `template`.
    UnknownStructuralKind,
    /// A template identifier is not present in the registry.
    MissingTemplate,
    /// The external engine reported a failure.
    External,
}

impl ErrorKind {
    /// Return the [`Phase`] this kind of error is raised in.
    pub fn phase(&self) -> Phase {
        match self {
            ErrorKind::InvalidDelimiters
            | ErrorKind::UnclosedTag
            | ErrorKind::UnclosedSection
            | ErrorKind::UnmatchedClose => Phase::Parse,
            ErrorKind::MissingBoundName
            | ErrorKind::MisplacedStructuralNode
            | ErrorKind::UnknownStructuralKind
            | ErrorKind::MissingTemplate
            | ErrorKind::External => Phase::Render,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ErrorKind::InvalidDelimiters => write!(f, "invalid delimiters"),
            ErrorKind::UnclosedTag => write!(f, "unclosed tag"),
            ErrorKind::UnclosedSection => write!(f, "unclosed section"),
            ErrorKind::UnmatchedClose => write!(f, "unmatched close"),
            ErrorKind::MissingBoundName => write!(f, "missing name"),
            ErrorKind::MisplacedStructuralNode => write!(f, "misplaced section"),
            ErrorKind::UnknownStructuralKind => write!(f, "unknown section kind"),
            ErrorKind::MissingTemplate => write!(f, "missing template"),
            ErrorKind::External => write!(f, "render failure"),
        }
    }
}

/// Describes an error, and allows adding a contextual help text and visualization.
///
/// # Examples
///
/// Creating an [`Error`] that includes a [`Visual`] of type [`Pointer`]:
///
/// ```
/// use weft::{Error, ErrorKind};
///
/// let error = Error::of(ErrorKind::UnmatchedClose)
///     .with_pointer("{{#var x}}x{{/list}}", 11..20)
///     .with_name("page.html")
///     .with_help("expected `{{/var}}`");
///
/// assert_eq!(error.kind(), ErrorKind::UnmatchedClose);
/// ```
///
/// When printed with `println!("{:#}", error)` the [`Error`] produces this output:
///
/// ```text
/// error: unmatched close
///   --> page.html:1:12
///    |
///  1 | {{#var x}}x{{/list}}
///    |            ^^^^^^^^^
///    |
///   = help: expected `{{/var}}`
/// ```
pub struct Error {
    /// Classification of the [`Error`].
    kind: ErrorKind,
    /// Describes the cause of the [`Error`].
    reason: String,
    /// A visualization to help illustrate the [`Error`].
    visual: Option<Box<dyn Visual>>,
    /// Additional information to display with the [`Error`].
    help: Option<String>,
    /// The name of the document that the [`Error`] comes from.
    name: Option<String>,
}

impl Error {
    /// Create a new [`Error`] of the given [`ErrorKind`].
    ///
    /// The reason text defaults to the description of the kind.
    pub fn of(kind: ErrorKind) -> Self {
        Error {
            kind,
            reason: kind.to_string(),
            name: None,
            visual: None,
            help: None,
        }
    }

    /// Create a new [`ErrorKind::External`] [`Error`] with the given reason text.
    ///
    /// This is the constructor an external engine should use to abort a render.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::{Error, ErrorKind};
    ///
    /// let error = Error::build("icon set is not loaded")
    ///     .with_help("load the icon set before rendering");
    ///
    /// assert_eq!(error.kind(), ErrorKind::External);
    /// ```
    pub fn build<T>(reason: T) -> Self
    where
        T: Into<String>,
    {
        Error {
            kind: ErrorKind::External,
            reason: reason.into(),
            name: None,
            visual: None,
            help: None,
        }
    }

    /// Set the reason text, which is a short summary of the [`Error`].
    pub fn with_reason<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.reason = text.into();

        self
    }

    /// Set the name text, which is the name of the document that the
    /// [`Error`] is related to.
    pub fn with_name<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.name = Some(text.into());

        self
    }

    /// Set the [`Visual`], which is a visualization that helps illustrate the
    /// cause of the error.
    pub fn with_visual(mut self, visual: impl Visual + 'static) -> Self {
        self.visual = Some(Box::new(visual));

        self
    }

    /// Set the visualization to a new [`Pointer`] with the given source text and
    /// [`Region`].
    ///
    /// This is a shortcut for `.with_visual(Pointer::new(source, region))`.
    pub fn with_pointer<T>(mut self, source: &str, region: T) -> Self
    where
        T: Into<Region>,
    {
        self.visual = Some(Box::new(Pointer::new(source, region.into())));

        self
    }

    /// Set the help text, which is contextual information to accompany the
    /// reason text.
    pub fn with_help<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.help = Some(text.into());

        self
    }

    /// Return the [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return the [`Phase`] the error was raised in.
    pub fn phase(&self) -> Phase {
        self.kind.phase()
    }

    /// Return the reason text.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Return the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Return true if a [`Visual`] is attached.
    pub fn has_visual(&self) -> bool {
        self.visual.is_some()
    }

    /// Return the name of the document that the error is related to.
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if !f.alternate() {
            writeln!(f, "{self:#}")?;
        }
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("reason", &self.reason)
            .field("name", &self.name)
            .field("visual", &self.visual)
            .field("help", &self.help)
            .finish()?;

        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let header = format!("{RED}error{RESET}");
        write!(f, "{header}: {}", self.reason)?;

        if let Some(visual) = self.visual.as_ref().filter(|_| f.alternate()) {
            return visual.display(f, self.name.as_deref(), self.help.as_deref());
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.reason == other.reason
            && self.help == other.help
            && self.name == other.name
    }
}
