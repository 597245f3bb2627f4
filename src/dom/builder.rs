//! Stack-based tree builder.
//!
//! Unlike a browser tree builder this one does no error recovery: an end tag
//! must match the innermost open element, and void elements are closed the
//! moment they are opened.

use log::trace;

use super::{Attribute, Document, Element, Event, Node};
use crate::error::{Error, Result};

/// Elements that never have content or an end tag.
///
/// See <https://html.spec.whatwg.org/multipage/syntax.html#void-elements>.
pub const VOID_ELEMENTS: [&str; 16] = [
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Check whether `name` is a void element (case-sensitive).
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// An element still waiting for its end tag. `name` is `None` for the root.
struct Frame {
    name: Option<String>,
    attrs: Vec<Attribute>,
    children: Vec<Node>,
}

impl Frame {
    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("#document")
    }
}

/// Builds a [`Document`] from start-tag, end-tag and text events.
pub struct TreeBuilder {
    stack: Vec<Frame>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            stack: vec![Frame {
                name: None,
                attrs: Vec::new(),
                children: Vec::new(),
            }],
        }
    }

    /// Feed one event.
    pub fn push(&mut self, event: Event) -> Result<()> {
        match event {
            Event::StartTag { name, attrs } => self.start_tag(name, attrs),
            Event::EndTag { name } => self.end_tag(&name),
            Event::Text(data) => self.text(data),
        }
    }

    pub fn start_tag(&mut self, name: String, attrs: Vec<Attribute>) -> Result<()> {
        self.ensure_not_void(|| format!("<{name}>"))?;
        let void = is_void_element(&name);
        self.stack.push(Frame {
            name: Some(name),
            attrs,
            children: Vec::new(),
        });
        if void {
            self.close();
        }
        Ok(())
    }

    pub fn end_tag(&mut self, name: &str) -> Result<()> {
        if is_void_element(name) {
            trace!("ignoring end tag for void element <{name}>");
            return Ok(());
        }
        let top = self.top();
        if top.name.as_deref() != Some(name) {
            return Err(Error::UnmatchedEndTag {
                open: top.label().to_string(),
                found: name.to_string(),
            });
        }
        self.close();
        Ok(())
    }

    pub fn text(&mut self, data: String) -> Result<()> {
        self.ensure_not_void(|| format!("{data:?}"))?;
        self.top_mut().children.push(Node::Text(data));
        Ok(())
    }

    /// Finish building. Every element except the root must have been closed.
    pub fn finish(mut self) -> Result<Document> {
        if self.stack.len() != 1 {
            let open = self.stack[1..]
                .iter()
                .map(|frame| frame.label().to_string())
                .collect();
            return Err(Error::UnclosedElements(open));
        }
        let root = self.stack.pop().map(|frame| frame.children);
        Ok(Document {
            children: root.unwrap_or_default(),
        })
    }

    fn ensure_not_void<F>(&self, describe: F) -> Result<()>
    where
        F: FnOnce() -> String,
    {
        match &self.top().name {
            Some(name) if is_void_element(name) => Err(Error::VoidContent {
                element: name.clone(),
                content: describe(),
            }),
            _ => Ok(()),
        }
    }

    /// Pop the innermost element and append it to its parent.
    fn close(&mut self) {
        // The root frame is never popped here: callers only close frames they pushed
        // or frames whose name matched an end tag.
        if self.stack.len() < 2 {
            return;
        }
        if let Some(Frame {
            name: Some(name),
            attrs,
            children,
        }) = self.stack.pop()
        {
            self.top_mut().children.push(Node::Element(Element {
                name,
                attrs,
                children,
            }));
        }
    }

    fn top(&self) -> &Frame {
        &self.stack[self.stack.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Frame {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }
}

/// Build a document from a complete event stream.
pub fn build_tree<I>(events: I) -> Result<Document>
where
    I: IntoIterator<Item = Event>,
{
    let mut builder = TreeBuilder::new();
    for event in events {
        builder.push(event)?;
    }
    builder.finish()
}
