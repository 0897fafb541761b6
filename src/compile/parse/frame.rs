use crate::{
    compile::{
        tree::{Section, Tree},
        Scope,
    },
    region::Region,
};

/// An open section awaiting its close tag.
pub struct Frame<'source> {
    /// True when opened with `^`.
    pub inverted: bool,
    /// The first word of the content.
    pub word: &'source str,
    /// The second word of the content.
    pub name: Option<&'source str>,
    /// Trimmed interior of the open tag.
    pub content: &'source str,
    /// Region of the open tag.
    pub region: Region,
    /// Source text seen since the open tag.
    pub source: String,
    /// Children seen since the open tag.
    pub scope: Scope<'source>,
}

impl<'source> Frame<'source> {
    /// Open a new Frame from the interior of a `#` or `^` tag.
    pub fn open(content: &'source str, region: Region, inverted: bool) -> Self {
        let mut words = content.split_whitespace();

        Self {
            inverted,
            word: words.next().unwrap_or_default(),
            name: words.next(),
            content,
            region,
            source: String::new(),
            scope: Scope::new(),
        }
    }

    /// Close the Frame, returning the finished Tree.
    pub fn close(self) -> Tree<'source> {
        let inverted = self.inverted;
        let section = Section {
            word: self.word,
            name: self.name,
            content: self.content,
            source: self.source,
            scope: self.scope,
            region: self.region,
        };

        if inverted {
            return Tree::InvertedSection(section);
        }

        match section.word {
            "var" => Tree::Var(section),
            "list" => Tree::List(section),
            "object" => Tree::Object(section),
            "template" => Tree::Template(section),
            _ => Tree::Section(section),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;
    use crate::compile::tree::Tree;

    #[test]
    fn test_open_splits_words() {
        let frame = Frame::open("template  icon extra", (0..24).into(), false);

        assert_eq!(frame.word, "template");
        assert_eq!(frame.name, Some("icon"));
    }

    #[test]
    fn test_close_kind() {
        let close = |content, inverted| Frame::open(content, (0..1).into(), inverted).close();

        assert!(matches!(close("var x", false), Tree::Var(_)));
        assert!(matches!(close("list", false), Tree::List(_)));
        assert!(matches!(close("object", false), Tree::Object(_)));
        assert!(matches!(close("template icon", false), Tree::Template(_)));
        assert!(matches!(close("nav", false), Tree::Section(_)));
        assert!(matches!(close("var x", true), Tree::InvertedSection(_)));
    }
}
