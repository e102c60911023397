use std::sync::Arc;

use crate::Element;
use async_trait::async_trait;

/// A piece of UI that renders to an [Element].
///
/// Rendering must not have side effects beyond building the tree:
/// callbacks stored in the tree run only when the host dispatches an event.
#[async_trait]
pub trait Component: Send + Sync {
    type Node;
    type Error;
    async fn render(self: Arc<Self>) -> Result<Element<Self::Node, Self::Error>, Self::Error>;
}
