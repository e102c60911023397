use std::sync::Arc;

use async_trait::async_trait;
use click_core::{Component, Element};
use click_html::{
    tag::{button, div, h1},
    text, EventHandler, HtmlNode,
};

use crate::{
    actions::{
        make_named_action, ARROW_FUNCTION_BODY, ARROW_FUNCTION_IMPLICIT_RETURN,
        EXPRESSION_REFERENCE,
    },
    Console, NonCallableValues,
};

pub const HEADING: &str = "My buttons";
pub const BUTTON_LABELS: [&str; 3] = [
    "Function expression reference",
    "Arrow function body",
    "Arrow function implicit return",
];

/// Three buttons, each wired to a differently shaped deferred action.
pub struct ClickHandlerDemo {
    handle_expression_reference: EventHandler,
    handle_arrow_function_body: EventHandler,
    arrow_function_implicit_return: EventHandler,
    illustrations: NonCallableValues,
}

impl ClickHandlerDemo {
    /// Builds the three actions and evaluates the non-callable illustrations,
    /// which logs once. None of the actions run here.
    pub fn new(console: Arc<dyn Console>) -> Self {
        // named, with a statement body
        let handle_expression_reference =
            make_named_action(console.clone(), EXPRESSION_REFERENCE);

        // anonymous, with a statement body
        let handle_arrow_function_body = {
            let console = console.clone();
            move || {
                console.log(ARROW_FUNCTION_BODY);
            }
        };

        // anonymous, the body is the logging call itself. Its value is `()`
        // and nobody looks at it.
        let arrow_function_implicit_return = {
            let console = console.clone();
            move || console.log(ARROW_FUNCTION_IMPLICIT_RETURN)
        };

        let illustrations = NonCallableValues::evaluate(console.as_ref());

        Self {
            handle_expression_reference: Arc::new(handle_expression_reference),
            handle_arrow_function_body: Arc::new(handle_arrow_function_body),
            arrow_function_implicit_return: Arc::new(arrow_function_implicit_return),
            illustrations,
        }
    }

    /// The actions in button order.
    pub fn actions(&self) -> [&EventHandler; 3] {
        [
            &self.handle_expression_reference,
            &self.handle_arrow_function_body,
            &self.arrow_function_implicit_return,
        ]
    }

    pub fn illustrations(&self) -> &NonCallableValues {
        &self.illustrations
    }
}

#[async_trait]
impl Component for ClickHandlerDemo {
    type Node = HtmlNode;
    type Error = anyhow::Error;

    /// Binds the actions built in [ClickHandlerDemo::new]; builds no new ones.
    async fn render(self: Arc<Self>) -> Result<Element<Self::Node, Self::Error>, Self::Error> {
        let buttons = self
            .actions()
            .into_iter()
            .zip(BUTTON_LABELS)
            .map(|(action, label)| {
                button()
                    .on_handler("click", action.clone())
                    .build()
                    .children(vec![text(label)])
            });

        Ok(div().build().children(
            std::iter::once(h1().build().children(vec![text(HEADING)]))
                .chain(buttons)
                .collect(),
        ))
    }
}
