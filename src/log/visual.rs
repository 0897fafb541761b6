mod pointer;

pub use pointer::Pointer;

use std::fmt::{Debug, Formatter, Result};

const BLANK: &str = "";
const PIPE: &str = "|";
const EQUAL: &str = "=";
const HIGHLIGHT: &str = "^";

/// Describes a type that can be associated with an Error and used
/// to print a visualization.
pub trait Visual: Debug {
    /// Display the visualization by writing to the given Formatter.
    fn display(
        &self,
        formatter: &mut Formatter<'_>,
        name: Option<&str>,
        help: Option<&str>,
    ) -> Result;
}

/// Get the zero indexed line and the byte offset within that line for the
/// given offset into the joined lines.
fn get_line_and_offset(lines: &[&str], offset: usize) -> (usize, usize) {
    let mut n = 0;

    for (i, line) in lines.iter().enumerate() {
        let len = line.len() + 1;
        if n + len > offset {
            return (i, offset - n);
        }
        n += len;
    }

    let last = lines.len().saturating_sub(1);
    let width = lines.last().map(|line| line.len()).unwrap_or(0);

    (last, width)
}

/// Wrapper for UnicodeWidthStr::width.
fn get_width(s: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_offset() {
        let lines = ["<body>", "{{#var x}}", "</body>"];

        assert_eq!(get_line_and_offset(&lines, 0), (0, 0));
        assert_eq!(get_line_and_offset(&lines, 7), (1, 0));
        assert_eq!(get_line_and_offset(&lines, 9), (1, 2));
        assert_eq!(get_line_and_offset(&lines, 100), (2, 7));
    }

    #[test]
    fn test_width() {
        assert_eq!(get_width("abc"), 3);
        assert_eq!(get_width("日本"), 4);
    }
}
