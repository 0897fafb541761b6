pub mod token;

mod state;

use crate::{
    compile::{
        lex::{state::State, token::Token},
        Sigil, Syntax,
    },
    log::{error_unclosed_tag, Error},
    region::Region,
};
use morel::Finder;
use std::ops::Range;

/// Result of reading the next [`Token`] from a [`Lexer`].
pub type TokenResult<'source> = Result<Option<(Token<'source>, Region)>, Error>;

/// Provides methods to read a source string as [`Token`] instances.
pub struct Lexer<'source> {
    /// Reference to the source text.
    pub source: &'source str,
    /// Position within source.
    pub cursor: usize,
    /// The delimiters currently in effect.
    syntax: Syntax<'source>,
    /// Compiled [`Finder`] instance used to search for the open delimiter
    /// in the source text.
    ///
    /// Rebuilt whenever the delimiters change.
    finder: Finder,
    /// Tracks the [`Lexer`] state and determines the action taken
    /// when `.next` is called.
    state: State,
}

impl<'source> Lexer<'source> {
    /// Create a new [`Lexer`] from the given source and initial [`Syntax`].
    #[inline]
    pub fn new(source: &'source str, syntax: Syntax<'source>) -> Self {
        Self {
            source,
            cursor: 0,
            finder: syntax.to_finder(),
            syntax,
            state: State::Static,
        }
    }

    /// Return the next [`Token`] and [`Region`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when an open delimiter has no matching close
    /// delimiter.
    pub fn next(&mut self) -> TokenResult<'source> {
        loop {
            let result = match self.state {
                State::Static => {
                    if self.cursor >= self.source.len() {
                        return Ok(None);
                    }
                    self.lex_static(self.cursor)
                }
                State::Tag { open } => self.lex_tag(open)?,
            };

            if let Some(next) = result {
                return Ok(Some(next));
            }
        }
    }

    /// Return the static text preceding the next open delimiter.
    ///
    /// Returns `None` when the open delimiter sits at the cursor, in which
    /// case only the state changes.
    fn lex_static(&mut self, from: usize) -> Option<(Token<'source>, Region)> {
        match self.finder.next(self.source, from) {
            Some((_, begin, end)) => {
                self.state = State::Tag { open: begin };
                self.cursor = end;

                (begin > from).then(|| (Token::Raw, Region::new(from..begin)))
            }
            None => {
                let end = self.source.len();
                self.cursor = end;

                Some((Token::Raw, Region::new(from..end)))
            }
        }
    }

    /// Return the tag that began with the open delimiter at `open`.
    ///
    /// Assumes the cursor is just past the open delimiter. A delimiter change
    /// takes effect before the tag is returned.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the close delimiter cannot be found.
    fn lex_tag(&mut self, open: usize) -> TokenResult<'source> {
        let source = self.source;
        let from = self.cursor;
        let rest = &source[from..];
        let close = self.syntax.close;

        let matched = match match_tag(rest, close) {
            Some(matched) => matched,
            None => {
                return Err(error_unclosed_tag(
                    source,
                    Region::new(open..from),
                    close,
                ))
            }
        };

        let content = rest[matched.content].trim();
        let end = from + matched.length;
        self.cursor = end;
        self.state = State::Static;

        if matched.sigil == Some(Sigil::Equal) {
            self.syntax = Syntax::from_content(content);
            self.finder = self.syntax.to_finder();
            ::log::debug!(
                "changing delimiters to `{}` `{}`",
                self.syntax.open,
                self.syntax.close
            );
        }

        Ok(Some((
            Token::Tag {
                sigil: matched.sigil,
                content,
            },
            Region::new(open..end),
        )))
    }
}

/// The outcome of matching a tag interior, relative to the text that follows
/// the open delimiter.
#[derive(Debug, PartialEq)]
struct Matched {
    sigil: Option<Sigil>,
    /// Untrimmed interior.
    content: Range<usize>,
    /// Length of the interior including the close delimiter.
    length: usize,
}

/// Match `\s*(sigil)?\s*(.+?)\s*=?\}?CLOSE` at the start of `rest`.
///
/// The interior is lazy and every optional part is greedy, so the earliest
/// close delimiter wins and a balancing `}` or `=` in front of it is
/// swallowed, as in `{{{ name }}}` or `{{=<% %>=}}`.
fn match_tag(rest: &str, close: &str) -> Option<Matched> {
    let last = rest.rfind(close)?;

    for start in whitespace_ends(rest, 0) {
        let sigil = rest[start..].chars().next().and_then(Sigil::from_char);

        if let Some(sigil) = sigil {
            let after = start + sigil.as_char().len_utf8();
            for content in whitespace_ends(rest, after) {
                if let Some((end, length)) = match_interior(rest, content, last, close) {
                    return Some(Matched {
                        sigil: Some(sigil),
                        content: content..end,
                        length,
                    });
                }
            }
        }

        for content in whitespace_ends(rest, start) {
            if let Some((end, length)) = match_interior(rest, content, last, close) {
                return Some(Matched {
                    sigil: None,
                    content: content..end,
                    length,
                });
            }
        }
    }

    None
}

/// Find the shortest non-empty interior beginning at `content` that is
/// followed by the close delimiter.
///
/// Returns the end of the interior and the length of the whole match.
fn match_interior(rest: &str, content: usize, last: usize, close: &str) -> Option<(usize, usize)> {
    rest[content..]
        .char_indices()
        .map(|(i, c)| content + i + c.len_utf8())
        .take_while(|end| *end <= last)
        .find_map(|end| match_close(rest, end, close).map(|length| (end, length)))
}

/// Match `\s*=?\}?CLOSE` at `at`, returning the position past the close
/// delimiter.
fn match_close(rest: &str, at: usize, close: &str) -> Option<usize> {
    for space in whitespace_ends(rest, at) {
        for (equal, brace) in [(true, true), (true, false), (false, true), (false, false)] {
            let mut tail = &rest[space..];
            if equal {
                match tail.strip_prefix('=') {
                    Some(next) => tail = next,
                    None => continue,
                }
            }
            if brace {
                match tail.strip_prefix('}') {
                    Some(next) => tail = next,
                    None => continue,
                }
            }
            if tail.starts_with(close) {
                let consumed = rest.len() - tail.len();
                return Some(consumed + close.len());
            }
        }
    }

    None
}

/// Return every position a greedy `\s*` starting at `from` may stop at,
/// longest first.
fn whitespace_ends(text: &str, from: usize) -> Vec<usize> {
    let mut ends = vec![from];
    for (i, c) in text[from..].char_indices() {
        if !c.is_whitespace() {
            break;
        }
        ends.push(from + i + c.len_utf8());
    }
    ends.reverse();

    ends
}
