/// Describes the internal state of a [`Lexer`][`super::Lexer`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum State {
    /// Indicates the [`Lexer`][`super::Lexer`] is scanning static text.
    Static,
    /// Indicates the [`Lexer`][`super::Lexer`] has consumed an open delimiter
    /// and is scanning the interior of a tag.
    Tag {
        /// Position of the open delimiter that began the tag.
        open: usize,
    },
}
