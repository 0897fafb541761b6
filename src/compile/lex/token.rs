use crate::compile::Sigil;
use std::fmt::Display;

/// Types emitted by the Lexer.
///
/// Each `Token` travels with the [`Region`][`crate::Region`] it was read from;
/// for a tag the region spans the delimiters as well as the interior.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'source> {
    /// Static text between tags.
    Raw,
    /// A tag, such as `{{#var name}}`.
    Tag {
        /// The sigil following the open delimiter, if any.
        sigil: Option<Sigil>,
        /// The trimmed interior of the tag, without the sigil.
        content: &'source str,
    },
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Raw => write!(f, "raw"),
            Token::Tag {
                sigil: Some(sigil),
                content,
            } => write!(f, "tag `{sigil}{content}`"),
            Token::Tag {
                sigil: None,
                content,
            } => write!(f, "tag `{content}`"),
        }
    }
}
