use crate::{HtmlElementBuilder, HtmlNode};

pub fn div() -> HtmlElementBuilder<&'static str> {
    HtmlNode::element("div")
}

pub fn h1() -> HtmlElementBuilder<&'static str> {
    HtmlNode::element("h1")
}

pub fn button() -> HtmlElementBuilder<&'static str> {
    HtmlNode::element("button")
}
