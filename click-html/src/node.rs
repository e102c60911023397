use click_core::Element;

use crate::{HtmlElement, HtmlElementBuilder};

#[derive(Debug, PartialEq)]
pub enum HtmlNode {
    Element(HtmlElement),
    Text(String),
}

impl HtmlNode {
    pub fn element(tag_name: &'static str) -> HtmlElementBuilder<&'static str> {
        HtmlElement::new().tag_name(tag_name)
    }

    pub fn text(text: String) -> Self {
        Self::Text(text)
    }

    pub fn as_element(&self) -> Option<&HtmlElement> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl<E> From<HtmlElement> for Element<HtmlNode, E> {
    fn from(element: HtmlElement) -> Self {
        Element::Node(HtmlNode::Element(element), Vec::new())
    }
}
