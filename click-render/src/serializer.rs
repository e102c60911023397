use std::fmt::Write;

use click_html::HtmlElement;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Opening tag with its attributes in key order. Attribute values are
/// escaped for a double-quoted context.
pub(crate) fn serialize_node_open(node: &HtmlElement) -> String {
    let mut output = format!("<{}", node.tag_name());
    for (key, value) in node.attributes() {
        let _ = write!(output, " {}=\"{}\"", key, encode_double_quoted_attribute(value));
    }
    output.push('>');
    output
}

pub(crate) fn serialize_node_close(node: &HtmlElement) -> String {
    format!("</{}>", node.tag_name())
}

pub(crate) fn serialize_text(text: &str) -> String {
    encode_text(text).into_owned()
}
