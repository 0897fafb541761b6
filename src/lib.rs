//! Weft - mustache-style templates that compose other templates.
//!
//! A document is plain text with tags. `var`, `list` and `object` sections
//! describe data, and a `template` section passes the data described inside
//! it to an external engine, splicing the text it returns into the output.
//!
//! ```
//! use weft::{render, Error, Registry};
//! use serde_json::{Map, Value};
//!
//! let registry = Registry::new().with_must("icon", "<span class=\"fa fa-{which}\"></span>");
//! let engine = registry.engine(|source: &str, data: &Map<String, Value>| -> Result<String, Error> {
//!     let which = data.get("which").and_then(Value::as_str).unwrap_or_default();
//!     Ok(source.replace("{which}", which))
//! });
//!
//! let output = render("{{#template icon}} {{#var which}}tree{{/var}} {{/template}}", &engine);
//! assert_eq!(output.unwrap(), "<span class=\"fa fa-tree\"></span>");
//! ```
mod compile;
mod log;
mod region;
mod render;

pub use crate::{
    compile::{parse, token, tree, Builder, Document, Parser, Scope, Sigil, Syntax},
    log::{Error, ErrorKind, Phase, Pointer, Visual},
    region::Region,
    render::{render, Container, Context, Invocation, Lookup, Registry, Render, Renderer},
};
