use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    sync::Arc,
};

use click_core::Element;

use crate::{EventHandler, HtmlNode};

/// Represents an html tag such as `<div>`, `<button>`, etc.
pub struct HtmlElement {
    pub(crate) tag_name: &'static str,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) callbacks: HashMap<String, EventHandler>,
}

impl Debug for HtmlElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut events = self.callbacks.keys().collect::<Vec<_>>();
        events.sort();

        f.debug_struct("HtmlElement")
            .field("tag_name", &self.tag_name)
            .field("attributes", &self.attributes)
            .field("callbacks", &events)
            .finish()
    }
}

impl HtmlElement {
    /// Build a new HtmlElement
    /// ```
    /// use click_html::HtmlElement;
    ///
    /// let element = HtmlElement::new().tag_name("div").build();
    /// assert_eq!(element.tag_name(), "div");
    /// ```
    pub fn new() -> HtmlElementBuilder<()> {
        HtmlElementBuilder {
            tag_name: (),
            attributes: BTreeMap::new(),
            callbacks: HashMap::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        self.tag_name
    }

    /// get a map of all the attributes:
    /// For a `<div id="foo" class="bar">` this would return
    /// `{"class": "bar", "id": "foo"}`
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// get a map of all the callbacks / event handlers:
    /// For a `<button>` built with `.on_click(|| println!("clicked"))`
    /// this would return `{ "click": || println!("clicked") }`
    pub fn callbacks(&self) -> &HashMap<String, EventHandler> {
        &self.callbacks
    }

    /// Attach children and turn the element into a tree node.
    pub fn children<E>(self, children: Vec<Element<HtmlNode, E>>) -> Element<HtmlNode, E> {
        Element::Node(HtmlNode::Element(self), children)
    }
}

pub struct HtmlElementBuilder<T> {
    pub(crate) tag_name: T,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) callbacks: HashMap<String, EventHandler>,
}

impl HtmlElementBuilder<()> {
    pub fn tag_name(self, tag_name: &'static str) -> HtmlElementBuilder<&'static str> {
        HtmlElementBuilder {
            tag_name,
            attributes: self.attributes,
            callbacks: self.callbacks,
        }
    }
}

impl<T> HtmlElementBuilder<T> {
    /// set one specific attribute of the element:
    /// ```
    /// use click_html::tag::div;
    ///
    /// let element = div().attr("id", "foo").build();
    /// assert_eq!(element.attributes().get("id"), Some(&"foo".to_string()));
    /// ```
    /// builds a `<div id="foo">`
    pub fn attr<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Bind a deferred action to an event slot.
    ///
    /// The handler takes no arguments and returns nothing. It is stored, not
    /// called: it runs once per event the host dispatches to this element.
    /// Values that are not callables are rejected when the binding is built:
    /// ```compile_fail,E0277
    /// use click_html::tag::button;
    ///
    /// let my_fixed_number = 42;
    /// let _ = button().on("click", my_fixed_number);
    /// ```
    pub fn on<K, C>(self, key: K, handler: C) -> Self
    where
        K: Into<String>,
        C: Fn() + Send + Sync + 'static,
    {
        self.on_handler(key, Arc::new(handler))
    }

    /// Bind an already shared handler, e.g. one built once and reused across renders:
    /// ```
    /// use std::sync::Arc;
    /// use click_html::{tag::button, EventHandler};
    ///
    /// let on_press: EventHandler = Arc::new(|| println!("pressed"));
    /// let element = button().on_handler("click", on_press.clone()).build();
    /// assert!(Arc::ptr_eq(&element.callbacks()["click"], &on_press));
    /// ```
    pub fn on_handler<K>(mut self, key: K, handler: EventHandler) -> Self
    where
        K: Into<String>,
    {
        self.callbacks.insert(key.into(), handler);
        self
    }

    /// Shorthand for `.on("click", handler)`:
    /// ```
    /// use click_html::tag::button;
    ///
    /// let element = button().on_click(|| println!("clicked")).build();
    /// assert!(element.callbacks().contains_key("click"));
    /// ```
    pub fn on_click<C>(self, handler: C) -> Self
    where
        C: Fn() + Send + Sync + 'static,
    {
        self.on("click", handler)
    }
}

impl HtmlElementBuilder<&'static str> {
    pub fn build(self) -> HtmlElement {
        HtmlElement {
            tag_name: self.tag_name,
            attributes: self.attributes,
            callbacks: self.callbacks,
        }
    }
}

impl PartialEq for HtmlElement {
    fn eq(&self, other: &Self) -> bool {
        self.tag_name == other.tag_name
            && self.attributes == other.attributes
            && self.callbacks.len() == other.callbacks.len()
            && self
                .callbacks
                .keys()
                .all(|key| other.callbacks.contains_key(key))
    }
}
