use proptest::prelude::*;
use serde_json::{Map, Value};
use weft::{parse, render, tree::Tree, Error};

fn refuse(name: &str, _: &Map<String, Value>) -> Result<String, Error> {
    Err(Error::build(format!("unexpected invocation of `{name}`")))
}

// Text that can never contain the open delimiter.
fn tagless_strategy() -> impl Strategy<Value = String> {
    "[^{]*"
}

// Documents assembled from a small set of tags and text, balanced or not.
fn document_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("{{#var a}}".to_string()),
        Just("{{/var}}".to_string()),
        Just("{{#list}}".to_string()),
        Just("{{/list}}".to_string()),
        Just("{{#template t}}".to_string()),
        Just("{{/template}}".to_string()),
        Just("{{! note }}".to_string()),
        Just("{{{ x }}}".to_string()),
        Just("{{> p }}".to_string()),
        Just("{{".to_string()),
        "[a-z <>\n]{0,6}",
    ];

    prop::collection::vec(piece, 0..16).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn test_tagless_text_renders_unchanged(text in tagless_strategy()) {
        prop_assert_eq!(render(&text, &refuse), Ok(text.clone()));
    }

    #[test]
    fn test_tagless_text_is_one_static(text in tagless_strategy()) {
        let document = parse(&text).unwrap();
        let scope = &document.scope().data;

        if text.is_empty() {
            prop_assert!(scope.is_empty());
        } else {
            prop_assert_eq!(scope.len(), 1);
            match &scope[0] {
                Tree::Static(part) => prop_assert_eq!(part.text, text.as_str()),
                tree => prop_assert!(false, "expected static, found {}", tree.kind()),
            }
        }
    }

    #[test]
    fn test_parse_is_deterministic(text in document_strategy()) {
        prop_assert_eq!(parse(&text), parse(&text));
    }

    #[test]
    fn test_extract_is_deterministic(text in document_strategy()) {
        if let Ok(document) = parse(&text) {
            prop_assert_eq!(document.extract(), document.extract());
        }
    }
}
