//! Owned HTML document tree.
//!
//! The tree is produced by [`builder::TreeBuilder`] from a flat stream of
//! [`Event`]s and is read-only afterwards. Text runs and elements are
//! distinct [`Node`] variants, so shape checks are plain pattern matches.

pub mod builder;
pub mod event;
pub mod serialize;
pub mod tokenize;

pub use builder::{TreeBuilder, VOID_ELEMENTS, build_tree, is_void_element};
pub use event::Event;
pub use serialize::to_events;
pub use tokenize::tokenize;

use crate::error::{Error, Result};

/// A single `name="value"` pair, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// The synthetic root: everything parsed at the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>, attrs: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            attrs,
            children: Vec::new(),
        }
    }

    /// Value of the first attribute called `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Direct text children, skipping child elements.
    pub fn text_children(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(Node::as_text)
    }

    /// Depth-first search of this element and its descendants.
    pub fn find<P>(&self, predicate: &P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        if predicate(self) {
            return Some(self);
        }
        find_in(&self.children, predicate)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// True for text nodes made only of whitespace.
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Node::Text(text) if text.trim().is_empty())
    }

    /// Require this node to be a `<name>` element.
    pub fn expect_element(&self, name: &str) -> Result<&Element> {
        match self {
            Node::Element(el) if el.name == name => Ok(el),
            Node::Element(el) => Err(Error::shape(format!(
                "expected <{name}>, found <{}>",
                el.name
            ))),
            Node::Text(text) => Err(Error::shape(format!(
                "expected <{name}>, found text {text:?}"
            ))),
        }
    }
}

impl Document {
    /// First element, in document order, matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        find_in(&self.children, &predicate)
    }

    /// Convenience lookup by tag name.
    pub fn find_by_tag(&self, name: &str) -> Option<&Element> {
        self.find(|el| el.is(name))
    }
}

fn find_in<'a, P>(nodes: &'a [Node], predicate: &P) -> Option<&'a Element>
where
    P: Fn(&Element) -> bool,
{
    nodes
        .iter()
        .filter_map(Node::as_element)
        .find_map(|el| el.find(predicate))
}

/// Parse markup into a [`Document`].
///
/// Tokenizes with html5ever and feeds the events through [`TreeBuilder`],
/// so the strict nesting rules of the builder apply.
///
/// # Examples
///
/// ```
/// use roadsigns::dom::parse_html;
///
/// let doc = parse_html(r#"<div class="x"><img src="/a.png"><p>Hi</p></div>"#).unwrap();
/// let div = doc.find_by_tag("div").unwrap();
/// assert_eq!(div.attr("class"), Some("x"));
/// assert_eq!(div.children.len(), 2);
/// ```
pub fn parse_html(markup: &str) -> Result<Document> {
    build_tree(tokenize(markup))
}
