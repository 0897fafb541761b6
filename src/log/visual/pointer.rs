use std::{
    cmp::max,
    fmt::{Formatter, Result},
};

use super::{
    super::{RESET, YELLOW},
    {get_line_and_offset, get_width, Visual, BLANK, EQUAL, HIGHLIGHT, PIPE},
};
use crate::region::Region;

/// A type of `Visual` that points to a specific location within source text.
#[derive(Debug, PartialEq)]
pub struct Pointer {
    /// The line that the Pointer is pointing to.
    ///
    /// This number should be zero indexed.
    line: usize,
    /// The display column that the Pointer is pointing to.
    ///
    /// This number should be zero indexed.
    column: usize,
    /// The display width of the object being highlighted.
    length: usize,
    /// The actual line of text that is being pointed to.
    text: String,
}

impl Pointer {
    /// Create a new Visual over the given source text and Region.
    ///
    /// Only the first line covered by the `Region` is highlighted.
    pub fn new(source: &str, region: Region) -> Self {
        let lines: Vec<_> = source.split_terminator('\n').collect();
        let (line, offset) = get_line_and_offset(&lines, region.begin);
        let text = lines
            .get(line)
            .map(|text| text.trim_end_matches('\r'))
            .unwrap_or_default()
            .to_string();

        let column = get_width(text.get(..offset).unwrap_or(&text));
        let highlighted = region.literal(source);
        let highlighted = highlighted.split('\n').next().unwrap_or_default();
        let length = max(1, get_width(highlighted.trim_end_matches('\r')));

        Self {
            line,
            column,
            length,
            text,
        }
    }

    /// Return the one indexed line and column of the Pointer.
    pub fn position(&self) -> (usize, usize) {
        (self.line + 1, self.column + 1)
    }
}

impl Visual for Pointer {
    fn display(
        &self,
        formatter: &mut Formatter<'_>,
        name: Option<&str>,
        help: Option<&str>,
    ) -> Result {
        let (num, col) = self.position();
        let num = num.to_string();
        let pad = get_width(&num);
        let align = self.column + self.length;

        let extra = "-".repeat(3_usize.saturating_sub(self.length));
        let name = name.unwrap_or("?");
        let text = &self.text;
        let underline = HIGHLIGHT.repeat(self.length);

        write!(
            formatter,
            "\n {BLANK:pad$}--> {name}:{num}:{col}\
             \n {BLANK:pad$} {PIPE}\
             \n {num:>} {PIPE} {text}\
             \n {BLANK:pad$} {PIPE} {YELLOW}{underline:>align$}{RESET}{extra}\
             \n {BLANK:pad$} {PIPE}\n",
        )?;

        if let Some(help) = help {
            writeln!(formatter, "{BLANK:pad$} {EQUAL} help: {help}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Pointer;
    use crate::region::Region;

    #[test]
    fn test_position_second_line() {
        let source = "<body>\r\n  {{/list}}\n</body>";
        let pointer = Pointer::new(source, Region::new(10..19));

        assert_eq!(pointer.position(), (2, 3));
        assert_eq!(pointer.text, "  {{/list}}");
        assert_eq!(pointer.length, 9);
    }

    #[test]
    fn test_end_of_source() {
        let source = "abc {{";
        let pointer = Pointer::new(source, Region::new(6..6));

        assert_eq!(pointer.position(), (1, 7));
        assert_eq!(pointer.length, 1);
    }

    #[test]
    fn test_empty_source() {
        let pointer = Pointer::new("", Region::new(0..0));

        assert_eq!(pointer.position(), (1, 1));
        assert_eq!(pointer.text, "");
    }
}
