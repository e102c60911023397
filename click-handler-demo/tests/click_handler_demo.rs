use std::sync::Arc;

use click_handler_demo::{
    actions::{ARROW_FUNCTION_BODY, ARROW_FUNCTION_IMPLICIT_RETURN, EXPRESSION_REFERENCE},
    ClickHandlerDemo, RecordingConsole, BUTTON_LABELS, HEADING, UH_OH,
};
use click_core::Element;
use click_render::{render_to_document, Document};

const TAGS: [&str; 3] = [
    EXPRESSION_REFERENCE,
    ARROW_FUNCTION_BODY,
    ARROW_FUNCTION_IMPLICIT_RETURN,
];

async fn render_demo() -> (Arc<RecordingConsole>, Document) {
    let console = Arc::new(RecordingConsole::default());
    let document =
        render_to_document::<anyhow::Error>(ClickHandlerDemo::new(console.clone()).into())
            .await
            .expect("demo renders");
    (console, document)
}

#[tokio::test]
async fn render_heading_and_three_buttons() {
    let (_, document) = render_demo().await;

    let root = document.roots()[0];
    assert_eq!(document.tag_name(root), Some("div"));

    let children = document.children(root);
    assert_eq!(children.len(), 4);
    assert_eq!(document.tag_name(children[0]), Some("h1"));
    assert_eq!(document.text_content(children[0]), HEADING);
    assert_eq!(document.query_selector_all("h1").len(), 1);

    let buttons = document.query_selector_all("button");
    assert_eq!(buttons, children[1..].to_vec());
    let labels = buttons
        .iter()
        .map(|button| document.text_content(*button))
        .collect::<Vec<_>>();
    assert_eq!(labels, BUTTON_LABELS);
}

#[tokio::test]
async fn construction_logs_once_and_render_logs_nothing() {
    let (console, _document) = render_demo().await;

    assert_eq!(console.lines(), vec![UH_OH]);
}

#[tokio::test]
async fn each_button_logs_its_own_tag() {
    let (console, document) = render_demo().await;
    console.take();

    for (label, tag) in BUTTON_LABELS.iter().zip(TAGS) {
        let button = document
            .find_by_text("button", label)
            .expect("button is rendered");

        assert_eq!(document.click(button), Ok(true));
        assert_eq!(console.take(), vec![tag]);
    }
}

#[tokio::test]
async fn repeated_clicks_do_not_accumulate() {
    let (console, document) = render_demo().await;
    console.take();
    let buttons = document.query_selector_all("button");

    for (button, tag) in buttons.iter().zip(TAGS).rev() {
        for clicks in 1..=3 {
            for _ in 0..clicks {
                document.click(*button).expect("button accepts clicks");
            }
            assert_eq!(console.take(), vec![tag; clicks]);
        }
    }
}

#[tokio::test]
async fn interleaved_clicks_log_in_click_order() {
    let (console, document) = render_demo().await;
    console.take();
    let buttons = document.query_selector_all("button");

    for index in [2, 0, 1, 0, 2] {
        document.click(buttons[index]).expect("button accepts clicks");
    }

    assert_eq!(
        console.take(),
        vec![TAGS[2], TAGS[0], TAGS[1], TAGS[0], TAGS[2]]
    );
}

#[tokio::test]
async fn heading_has_no_click_slot() {
    let (console, document) = render_demo().await;
    console.take();
    let heading = document.query_selector_all("h1")[0];

    assert_eq!(document.click(heading), Ok(false));
    assert!(console.lines().is_empty());
}

#[tokio::test]
async fn every_render_evaluates_no_action() {
    let console = Arc::new(RecordingConsole::default());
    let demo = Arc::new(ClickHandlerDemo::new(console.clone()));
    console.take();

    for _ in 0..3 {
        let _ = click_core::Component::render(demo.clone())
            .await
            .expect("demo renders");
    }

    assert!(console.lines().is_empty());
}

#[tokio::test]
async fn documents_share_the_constructed_actions() {
    let console = Arc::new(RecordingConsole::default());
    let demo = Arc::new(ClickHandlerDemo::new(console.clone()));

    let first = render_to_document::<anyhow::Error>(Element::Component(demo.clone()))
        .await
        .expect("demo renders");
    let second = render_to_document::<anyhow::Error>(Element::Component(demo.clone()))
        .await
        .expect("demo renders");

    for document in [&first, &second] {
        let buttons = document.query_selector_all("button");
        for (button, action) in buttons.into_iter().zip(demo.actions()) {
            let bound = document.handler(button, "click").expect("click slot");
            assert!(Arc::ptr_eq(bound, action));
        }
    }
    assert_eq!(console.lines(), vec![UH_OH]);
}
