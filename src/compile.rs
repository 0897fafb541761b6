mod document;
mod lex;
mod parse;
mod syntax;

pub use crate::compile::{
    document::Document,
    lex::token,
    parse::{scope::Scope, tree, Parser},
    syntax::{Builder, Syntax},
};

use crate::log::Error;
use std::fmt::Display;

/// Parse a [`Document`] from the given text with the default `{{` `}}` delimiters.
///
/// # Errors
///
/// Returns an [`Error`] when a tag or section is left open, or a close tag
/// does not match the section it closes.
///
/// # Examples
///
/// ```
/// use weft::parse;
///
/// let document = parse("<p>{{#template icon}}{{#var which}}tree{{/var}}{{/template}}</p>");
/// assert!(document.is_ok());
/// ```
pub fn parse(text: &str) -> Result<Document<'_>, Error> {
    Parser::new(text).compile()
}

/// The character that follows the open delimiter and selects what a tag does.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Sigil {
    /// `&`, an unescaped variable.
    Ampersand,
    /// `{`, an unescaped variable.
    Brace,
    /// `>`, a partial reference.
    Greater,
    /// `<`, a partial reference.
    Lesser,
    /// `!`, a comment.
    Exclamation,
    /// `=`, a delimiter change.
    Equal,
    /// `#`, opens a section.
    Pound,
    /// `^`, opens an inverted section.
    Caret,
    /// `/`, closes the innermost open section.
    Slash,
}

impl Sigil {
    /// Return the [`Sigil`] represented by the given character, if any.
    pub fn from_char(c: char) -> Option<Self> {
        let sigil = match c {
            '&' => Sigil::Ampersand,
            '{' => Sigil::Brace,
            '>' => Sigil::Greater,
            '<' => Sigil::Lesser,
            '!' => Sigil::Exclamation,
            '=' => Sigil::Equal,
            '#' => Sigil::Pound,
            '^' => Sigil::Caret,
            '/' => Sigil::Slash,
            _ => return None,
        };

        Some(sigil)
    }

    /// Return the character that represents this [`Sigil`].
    pub fn as_char(&self) -> char {
        match self {
            Sigil::Ampersand => '&',
            Sigil::Brace => '{',
            Sigil::Greater => '>',
            Sigil::Lesser => '<',
            Sigil::Exclamation => '!',
            Sigil::Equal => '=',
            Sigil::Pound => '#',
            Sigil::Caret => '^',
            Sigil::Slash => '/',
        }
    }
}

impl Display for Sigil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Sigil;

    #[test]
    fn test_sigil_round_trip() {
        for c in ['&', '{', '>', '<', '!', '=', '#', '^', '/'] {
            assert_eq!(Sigil::from_char(c).map(|s| s.as_char()), Some(c));
        }
        assert_eq!(Sigil::from_char('a'), None);
        assert_eq!(Sigil::from_char('}'), None);
    }
}
