mod element;
mod event;
mod node;
pub mod tag;

use click_core::Element;
pub use element::{HtmlElement, HtmlElementBuilder};
pub use event::EventHandler;
pub use node::HtmlNode;

/// Build a text node:
/// ```
/// use click_html::{text, HtmlNode};
///
/// let greeting: click_core::Element<HtmlNode, ()> = text("Hello");
/// ```
pub fn text<E, T>(text: T) -> Element<HtmlNode, E>
where
    T: ToString,
{
    Element::Node(HtmlNode::text(text.to_string()), Vec::new())
}
