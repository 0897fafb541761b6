use super::{Error, ErrorKind};
use crate::region::Region;

/// Return an [`Error`] explaining that a tag was opened but never closed.
pub fn error_unclosed_tag(source: &str, region: Region, close: &str) -> Error {
    Error::of(ErrorKind::UnclosedTag)
        .with_pointer(source, region)
        .with_help(format!(
            "expected `{close}` to close this tag before the end of the document"
        ))
}

/// Return an [`Error`] explaining that a section was still open when the
/// document ended.
pub fn error_unclosed_section(source: &str, region: Region, word: &str) -> Error {
    Error::of(ErrorKind::UnclosedSection)
        .with_pointer(source, region)
        .with_help(format!("did you close the `{word}` section with `/{word}`?"))
}

/// Return an [`Error`] explaining that a close tag has no open section.
pub fn error_close_unopened(source: &str, region: Region, content: &str) -> Error {
    Error::of(ErrorKind::UnmatchedClose)
        .with_pointer(source, region)
        .with_help(format!("`/{content}` closes a section that was never opened"))
}

/// Return an [`Error`] explaining that a close tag does not match the
/// innermost open section.
pub fn error_mismatched_close(source: &str, region: Region, word: &str, content: &str) -> Error {
    Error::of(ErrorKind::UnmatchedClose)
        .with_pointer(source, region)
        .with_help(format!(
            "expected `/{word}` to close the open `{word}` section, found `/{content}`"
        ))
}

/// Return an [`Error`] describing a section that needs a name in its parent.
pub fn error_unnamed(source: &str, region: Region, content: &str) -> Error {
    Error::of(ErrorKind::MissingBoundName)
        .with_reason(format!("unnamed variable: `#{content}`"))
        .with_pointer(source, region)
        .with_help("sections inside a template or object are stored by name, try `#var name`")
}

/// Return an [`Error`] describing a template invocation without an identifier.
pub fn error_unnamed_template(source: &str, region: Region) -> Error {
    Error::of(ErrorKind::MissingBoundName)
        .with_reason("unnamed template")
        .with_pointer(source, region)
        .with_help("name the template to render, for example `#template icon`")
}

/// Return an [`Error`] describing a `var`, `list` or `object` in plain text.
pub fn error_outside_container(source: &str, region: Region, content: &str) -> Error {
    Error::of(ErrorKind::MisplacedStructuralNode)
        .with_reason(format!(
            "`#{content}` must be inside a template, list, or object"
        ))
        .with_pointer(source, region)
}

/// Return an [`Error`] describing a template nested directly in a list or object.
pub fn error_nested_template(source: &str, region: Region, content: &str, parent: &str) -> Error {
    Error::of(ErrorKind::MisplacedStructuralNode)
        .with_reason(format!("`#{content}` is nested directly in a {parent}"))
        .with_pointer(source, region)
        .with_help("templates may only be placed inside a `var` or plain text")
}

/// Return an [`Error`] describing a section with an unrecognized kind word.
pub fn error_unknown_kind(source: &str, region: Region, word: &str) -> Error {
    Error::of(ErrorKind::UnknownStructuralKind)
        .with_reason(format!("not a var, list, object, or template: `{word}`"))
        .with_pointer(source, region)
}

/// Return an [`Error`] describing a missing template.
pub fn error_missing_template(name: &str) -> Error {
    Error::of(ErrorKind::MissingTemplate).with_help(format!(
        "template `{name}` not found in registry, add it with `.insert`"
    ))
}

/// Return an [`Error`] explaining that a registry name can never be invoked.
pub fn error_unreachable_name(name: &str) -> Error {
    Error::of(ErrorKind::MissingBoundName)
        .with_reason(format!("template name `{name}` can never be invoked"))
        .with_help("a name must be a single word, as in `#template icon`")
}

/// Return an [`Error`] explaining why a delimiter cannot be used.
pub fn error_invalid_delimiter(delimiter: &str) -> Error {
    Error::of(ErrorKind::InvalidDelimiters).with_help(format!(
        "delimiter `{delimiter}` must not be empty or contain whitespace"
    ))
}
