use std::{pin::Pin, task::Poll};

use futures_util::{
    future::{self},
    stream::{once, FuturesOrdered},
    Future, Stream, StreamExt,
};

use crate::Element;

use pin_project::pin_project;

type NodeStreamItem<N, E> = Result<(N, NodeStream<N, E>), E>;

/// A stream of rendered nodes in document order.
/// Every node comes with the stream of its own children.
#[pin_project]
pub struct NodeStream<N, E>(#[pin] Pin<Box<dyn Stream<Item = NodeStreamItem<N, E>> + Send>>);

impl<N, E> Stream for NodeStream<N, E> {
    type Item = NodeStreamItem<N, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> Poll<Option<Self::Item>> {
        let projection = self.project();
        projection.0.poll_next(cx)
    }
}

impl<N, E> NodeStream<N, E>
where
    E: Send + 'static,
    N: Send + 'static,
{
    fn from(stream: impl Stream<Item = NodeStreamItem<N, E>> + Send + 'static) -> Self {
        Self(Box::pin(stream))
    }

    fn ready(item: NodeStreamItem<N, E>) -> Self {
        Self::from(once(future::ready(item)))
    }

    fn wrap(inner: impl Future<Output = NodeStream<N, E>> + Send + 'static) -> Self {
        Self(Box::pin(once(inner).flatten()))
    }
}

fn render_element<N, E>(
    element: Element<N, E>,
) -> Pin<Box<dyn Future<Output = NodeStream<N, E>> + Send>>
where
    N: Send + 'static,
    E: Send + 'static,
{
    match element {
        Element::Component(component) => Box::pin(async move {
            match component.render().await {
                Ok(element) => render_element(element).await,
                Err(error) => NodeStream::ready(Err(error)),
            }
        }),
        Element::Node(node, children) => Box::pin(future::ready(NodeStream::ready(Ok((
            node,
            render_children(children),
        ))))),
        Element::Fragment(children) => Box::pin(future::ready(render_children(children))),
    }
}

fn render_children<N, E>(children: Vec<Element<N, E>>) -> NodeStream<N, E>
where
    N: Send + 'static,
    E: Send + 'static,
{
    let children = children
        .into_iter()
        .map(render_element)
        .collect::<FuturesOrdered<_>>()
        .flatten();

    NodeStream::from(children)
}

/// render_stream renders an element tree once.
/// Components are resolved lazily while the stream is polled and nodes come out
/// in document order. Hosts like click-render walk this stream to build
/// HTML or an in-memory document.
pub fn render_stream<N, E>(element: Element<N, E>) -> NodeStream<N, E>
where
    N: Send + 'static,
    E: Send + 'static,
{
    NodeStream::wrap(render_element(element))
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use async_trait::async_trait;

    use super::*;
    use crate::Component;

    #[derive(Debug, PartialEq)]
    struct MockNode(i32);

    async fn collect(stream: NodeStream<MockNode, ()>) -> Result<Vec<(i32, usize)>, ()> {
        let mut output = Vec::new();
        let mut stack = vec![(0, stream)];

        while let Some((depth, stream)) = stack.last_mut() {
            let depth = *depth;
            match stream.next().await {
                Some(Ok((node, children))) => {
                    output.push((node.0, depth));
                    stack.push((depth + 1, children));
                }
                Some(Err(error)) => return Err(error),
                None => {
                    stack.pop();
                }
            }
        }

        Ok(output)
    }

    #[tokio::test]
    async fn render_nodes_in_document_order() {
        let element = Element::Node(
            MockNode(0),
            vec![
                Element::Node(MockNode(1), vec![Element::Node(MockNode(2), Vec::new())]),
                Element::Fragment(vec![
                    Element::Node(MockNode(3), Vec::new()),
                    Element::Node(MockNode(4), Vec::new()),
                ]),
            ],
        );

        let output = collect(render_stream(element)).await;

        assert_eq!(output, Ok(vec![(0, 0), (1, 1), (2, 2), (3, 1), (4, 1)]));
    }

    #[tokio::test]
    async fn render_basic_component() {
        struct MockComponent;

        #[async_trait]
        impl Component for MockComponent {
            type Error = ();
            type Node = MockNode;
            async fn render(
                self: Arc<Self>,
            ) -> Result<Element<Self::Node, Self::Error>, Self::Error> {
                Ok(Element::Node(
                    MockNode(0),
                    vec![Element::Node(MockNode(1), Vec::new())],
                ))
            }
        }

        let output = collect(render_stream(MockComponent.into())).await;

        assert_eq!(output, Ok(vec![(0, 0), (1, 1)]));
    }

    #[tokio::test]
    async fn render_each_component_once() {
        struct Counted(Arc<AtomicUsize>);

        #[async_trait]
        impl Component for Counted {
            type Error = ();
            type Node = MockNode;
            async fn render(
                self: Arc<Self>,
            ) -> Result<Element<Self::Node, Self::Error>, Self::Error> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(Element::Node(MockNode(7), Vec::new()))
            }
        }

        let renders = Arc::new(AtomicUsize::new(0));
        let element = Element::Fragment(vec![
            Counted(renders.clone()).into(),
            Counted(renders.clone()).into(),
        ]);

        let output = collect(render_stream(element)).await;

        assert_eq!(output, Ok(vec![(7, 0), (7, 0)]));
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn render_error_is_yielded() {
        struct Failing;

        #[async_trait]
        impl Component for Failing {
            type Error = ();
            type Node = MockNode;
            async fn render(
                self: Arc<Self>,
            ) -> Result<Element<Self::Node, Self::Error>, Self::Error> {
                Err(())
            }
        }

        let element = Element::Node(MockNode(0), vec![Failing.into()]);

        assert_eq!(collect(render_stream(element)).await, Err(()));
    }
}
