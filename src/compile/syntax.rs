use crate::log::{error_invalid_delimiter, Error};
use morel::Finder;

/// Default open delimiter.
pub const DEFAULT_OPEN: &str = "{{";
/// Default close delimiter.
pub const DEFAULT_CLOSE: &str = "}}";

/// Identifies the open delimiter in a [`Finder`] match.
const OPEN: usize = 0;

/// The active pair of delimiters.
///
/// The pair is set once through a [`Builder`] and may be replaced mid-document
/// by a delimiter change tag such as `{{=<% %>=}}`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Syntax<'marker> {
    /// Marks the beginning of a tag.
    pub open: &'marker str,
    /// Marks the end of a tag.
    pub close: &'marker str,
}

impl<'marker> Syntax<'marker> {
    /// Read a new pair from the interior of a delimiter change tag.
    ///
    /// The interior is split on whitespace, and a missing half falls back to the
    /// default delimiter.
    pub fn from_content(content: &'marker str) -> Self {
        let mut words = content.split_whitespace();

        Self {
            open: words.next().unwrap_or(DEFAULT_OPEN),
            close: words.next().unwrap_or(DEFAULT_CLOSE),
        }
    }

    /// Return a [`Finder`] that locates the open delimiter.
    pub(crate) fn to_finder(self) -> Finder {
        Finder::new(morel::Syntax::new(vec![(OPEN, self.open.to_string())]))
    }
}

impl Default for Syntax<'static> {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN,
            close: DEFAULT_CLOSE,
        }
    }
}

/// Provides methods to build a [`Syntax`].
///
/// # Example
///
/// ```
/// use weft::Builder;
///
/// let syntax = Builder::new()
///     .with_delimiters("<%", "%>")
///     .to_syntax();
///
/// assert!(syntax.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Builder<'marker> {
    open: &'marker str,
    close: &'marker str,
}

impl<'marker> Builder<'marker> {
    /// Create a new [`Builder`] with the default `{{` `}}` delimiters.
    #[inline]
    pub fn new() -> Self {
        Self {
            open: DEFAULT_OPEN,
            close: DEFAULT_CLOSE,
        }
    }

    /// Set the delimiters.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Builder;
    ///
    /// let mut builder = Builder::new();
    /// builder.set_delimiters("[[", "]]");
    /// ```
    #[inline]
    pub fn set_delimiters(&mut self, open: &'marker str, close: &'marker str) {
        self.open = open;
        self.close = close;
    }

    /// Set the delimiters.
    ///
    /// Returns the [`Builder`], so additional methods may be chained.
    #[inline]
    pub fn with_delimiters(mut self, open: &'marker str, close: &'marker str) -> Self {
        self.set_delimiters(open, close);

        self
    }

    /// Return a [`Syntax`] from the delimiters in this [`Builder`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if either delimiter is empty or contains whitespace,
    /// since such a delimiter could never be written in a delimiter change tag.
    pub fn to_syntax(self) -> Result<Syntax<'marker>, Error> {
        for delimiter in [self.open, self.close] {
            if delimiter.is_empty() || delimiter.contains(char::is_whitespace) {
                return Err(error_invalid_delimiter(delimiter));
            }
        }

        Ok(Syntax {
            open: self.open,
            close: self.close,
        })
    }
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::ErrorKind;

    #[test]
    fn test_builder_default() {
        assert_eq!(Builder::new().to_syntax().unwrap(), Syntax::default());
    }

    #[test]
    fn test_builder_rejects_invalid() {
        for (open, close) in [("", "}}"), ("{{", ""), ("{ {", "}}")] {
            let result = Builder::new().with_delimiters(open, close).to_syntax();
            assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidDelimiters);
        }
    }

    #[test]
    fn test_from_content() {
        assert_eq!(
            Syntax::from_content("<% %>"),
            Syntax {
                open: "<%",
                close: "%>"
            }
        );
        assert_eq!(
            Syntax::from_content("  [[   ]]  "),
            Syntax {
                open: "[[",
                close: "]]"
            }
        );
        assert_eq!(
            Syntax::from_content("<%"),
            Syntax {
                open: "<%",
                close: DEFAULT_CLOSE
            }
        );
    }

    #[test]
    fn test_finder_locates_open() {
        let finder = Syntax::from_content("<% %>").to_finder();

        assert_eq!(
            finder.next("abc <% x %>", 0),
            Some((OPEN, 4, 6))
        );
        assert_eq!(finder.next("abc {{ x }}", 0), None);
    }
}
