use click_core::{render_stream, Element};
use click_html::HtmlNode;
use futures_util::StreamExt;

use crate::serializer::{serialize_node_open, serialize_text};

/// render_to_string takes a click-core Element and returns its HTML.
/// Text and attribute values are escaped. Event slots are not part of the
/// markup; use [crate::render_to_document] to keep them around for dispatching.
pub async fn render_to_string<E>(element: Element<HtmlNode, E>) -> Result<String, E>
where
    E: Send + 'static,
{
    let mut output = String::new();

    let mut stack = vec![(None, render_stream(element))];

    while let Some((_, stream)) = stack.last_mut() {
        match stream.next().await {
            Some(Ok((node, children))) => match node {
                HtmlNode::Element(element) => {
                    output.push_str(&serialize_node_open(&element));
                    stack.push((Some(element.tag_name().to_string()), children));
                }
                HtmlNode::Text(text) => {
                    output.push_str(&serialize_text(&text));
                }
            },
            Some(Err(error)) => return Err(error),
            None => {
                if let Some((Some(tag_name), _)) = stack.pop() {
                    output.push_str(&format!("</{}>", tag_name));
                }
            }
        }
    }

    Ok(output)
}
