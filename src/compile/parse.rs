//! Weft parser.
//!
//! Utilizes a Lexer to receive tokens and their Region, which it uses to
//! construct a new Document containing the token tree.
//!
//! Open sections are tracked on a stack of frames. Each frame collects its
//! children and the raw source text between its open and close tag.
pub mod scope;
pub mod tree;

mod frame;

use crate::{
    compile::{
        lex::{token::Token, Lexer},
        parse::{
            frame::Frame,
            tree::{Static, Tag, Tree},
        },
        Document, Scope, Sigil, Syntax,
    },
    log::{error_close_unopened, error_mismatched_close, error_unclosed_section, Error},
};

pub struct Parser<'source> {
    /// Lexer used to pull from source as tokens instead of raw text.
    lexer: Lexer<'source>,
}

impl<'source> Parser<'source> {
    /// Create a new Parser from the given string, using the default
    /// `{{` `}}` delimiters.
    #[inline]
    pub fn new(source: &'source str) -> Self {
        Self {
            lexer: Lexer::new(source, Syntax::default()),
        }
    }

    /// Use the given [`Syntax`] as the initial delimiters.
    #[inline]
    pub fn with_syntax(self, syntax: Syntax<'source>) -> Self {
        Self {
            lexer: Lexer::new(self.lexer.source, syntax),
        }
    }

    /// Compile the template.
    ///
    /// Returns a new Document, which can be rendered with some external
    /// template engine or used to extract data.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when a tag or section is left open, or when a
    /// close tag does not match the innermost open section.
    pub fn compile(mut self) -> Result<Document<'source>, Error> {
        let source = self.lexer.source;
        let mut root = Scope::new();
        let mut frames: Vec<Frame<'source>> = vec![];
        let mut partials: Vec<&'source str> = vec![];

        while let Some((token, region)) = self.lexer.next()? {
            let raw = region.literal(source);

            let (sigil, content) = match token {
                Token::Raw => {
                    append(&mut frames, raw);
                    let tree = Tree::Static(Static { text: raw, region });
                    push(&mut frames, &mut root, tree);
                    continue;
                }
                Token::Tag { sigil, content } => (sigil, content),
            };

            let tag = Tag { content, region };
            let tree = match sigil {
                None => Tree::Etag(tag),
                Some(Sigil::Ampersand | Sigil::Brace) => Tree::Utag(tag),
                Some(Sigil::Greater | Sigil::Lesser) => {
                    partials.push(content);
                    Tree::Partial(tag)
                }
                Some(Sigil::Exclamation) => continue,
                Some(Sigil::Equal) => Tree::DelimiterChange(tag),
                Some(sigil @ (Sigil::Pound | Sigil::Caret)) => {
                    append(&mut frames, raw);
                    frames.push(Frame::open(content, region, sigil == Sigil::Caret));
                    continue;
                }
                Some(Sigil::Slash) => {
                    let frame = frames
                        .pop()
                        .ok_or_else(|| error_close_unopened(source, region, content))?;

                    if frame.word != content {
                        return Err(error_mismatched_close(
                            source, region, frame.word, content,
                        ));
                    }

                    push(&mut frames, &mut root, frame.close());
                    append(&mut frames, raw);
                    continue;
                }
            };

            append(&mut frames, raw);
            push(&mut frames, &mut root, tree);
        }

        if let Some(frame) = frames.last() {
            return Err(error_unclosed_section(source, frame.region, frame.word));
        }

        Ok(Document::new(source, partials, root))
    }
}

/// Append text to the source of every open frame.
fn append(frames: &mut [Frame], text: &str) {
    for frame in frames.iter_mut() {
        frame.source.push_str(text);
    }
}

/// Push a Tree into the innermost open frame, or the root Scope when no
/// frame is open.
fn push<'source>(frames: &mut [Frame<'source>], root: &mut Scope<'source>, tree: Tree<'source>) {
    match frames.last_mut() {
        Some(frame) => frame.scope.data.push(tree),
        None => root.data.push(tree),
    }
}
