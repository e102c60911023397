use std::sync::Arc;

use crate::Component;

/// A node of the virtual tree, parameterised over the renderer's node type
/// and the error type components may fail with.
pub enum Element<Node, Error> {
    Component(Arc<dyn Component<Node = Node, Error = Error>>),
    Node(Node, Vec<Element<Node, Error>>),
    Fragment(Vec<Element<Node, Error>>),
}

impl<N, E, C> From<C> for Element<N, E>
where
    C: Component<Node = N, Error = E> + 'static,
{
    fn from(component: C) -> Self {
        Element::Component(Arc::new(component))
    }
}
