use std::fmt::Display;

use click_core::{render_stream, Element};
use click_html::{EventHandler, HtmlNode};
use futures_util::StreamExt;

use crate::{
    serializer::{serialize_node_close, serialize_node_open, serialize_text},
    DispatchError,
};

/// Position of a node inside its [Document]. Ids are assigned in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct DocumentNode {
    node: HtmlNode,
    children: Vec<NodeId>,
}

/// An in-memory rendering target.
///
/// Unlike the HTML string, the document keeps every element's event slots,
/// so a host (or a test) can deliver events to the rendered tree.
#[derive(Default)]
pub struct Document {
    nodes: Vec<DocumentNode>,
    roots: Vec<NodeId>,
}

impl Document {
    fn insert(&mut self, node: HtmlNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(DocumentNode {
            node,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes, in order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> Option<&HtmlNode> {
        self.nodes.get(id.0).map(|entry| &entry.node)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|entry| entry.children.as_slice())
            .unwrap_or_default()
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.node(id)
            .and_then(HtmlNode::as_element)
            .map(|element| element.tag_name())
    }

    /// Concatenated text of the node and all of its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut output = String::new();
        self.collect_text(id, &mut output);
        output
    }

    fn collect_text(&self, id: NodeId, output: &mut String) {
        match self.node(id) {
            Some(HtmlNode::Text(text)) => output.push_str(text),
            Some(HtmlNode::Element(_)) => {
                for child in self.children(id) {
                    self.collect_text(*child, output);
                }
            }
            None => {}
        }
    }

    /// All elements with the given tag name, in document order.
    pub fn query_selector_all(&self, tag_name: &str) -> Vec<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| self.tag_name(*id) == Some(tag_name))
            .collect()
    }

    /// The first element with the given tag name whose text content equals `text`.
    pub fn find_by_text(&self, tag_name: &str, text: &str) -> Option<NodeId> {
        self.query_selector_all(tag_name)
            .into_iter()
            .find(|id| self.text_content(*id) == text)
    }

    /// The handler bound to `event` on an element, if any.
    pub fn handler(&self, id: NodeId, event: &str) -> Option<&EventHandler> {
        self.node(id)
            .and_then(HtmlNode::as_element)
            .and_then(|element| element.callbacks().get(event))
    }

    /// Deliver an event to a node.
    ///
    /// Runs the bound handler exactly once, synchronously, and reports whether
    /// there was one. Panics raised by the handler are not caught.
    pub fn dispatch(&self, id: NodeId, event: &str) -> Result<bool, DispatchError> {
        let element = match self.node(id) {
            Some(HtmlNode::Element(element)) => element,
            Some(HtmlNode::Text(_)) => return Err(DispatchError::NotAnElement(id)),
            None => return Err(DispatchError::UnknownNode(id)),
        };

        match element.callbacks().get(event) {
            Some(handler) => {
                tracing::debug!(node = %id, tag = element.tag_name(), event, "dispatching event");
                handler();
                Ok(true)
            }
            None => {
                tracing::debug!(node = %id, tag = element.tag_name(), event, "no handler bound");
                Ok(false)
            }
        }
    }

    pub fn click(&self, id: NodeId) -> Result<bool, DispatchError> {
        self.dispatch(id, "click")
    }

    /// Serialize the document as HTML. Event slots are left out.
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        for root in &self.roots {
            self.write_html(*root, &mut output);
        }
        output
    }

    fn write_html(&self, id: NodeId, output: &mut String) {
        match self.node(id) {
            Some(HtmlNode::Element(element)) => {
                output.push_str(&serialize_node_open(element));
                for child in self.children(id) {
                    self.write_html(*child, output);
                }
                output.push_str(&serialize_node_close(element));
            }
            Some(HtmlNode::Text(text)) => output.push_str(&serialize_text(text)),
            None => {}
        }
    }
}

/// Render an element into a [Document].
/// Rendering only builds the tree: no event handler runs until it is dispatched.
pub async fn render_to_document<E>(element: Element<HtmlNode, E>) -> Result<Document, E>
where
    E: Send + 'static,
{
    let mut document = Document::default();

    let mut stack = vec![(None, render_stream(element))];

    while let Some((parent, stream)) = stack.last_mut() {
        let parent = *parent;
        match stream.next().await {
            Some(Ok((node, children))) => {
                let id = document.insert(node, parent);
                stack.push((Some(id), children));
            }
            Some(Err(error)) => return Err(error),
            None => {
                stack.pop();
            }
        }
    }

    tracing::debug!(nodes = document.len(), "rendered document");

    Ok(document)
}
