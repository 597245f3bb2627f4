//! Depth-first re-serialization of a document back into events.

use super::{Document, Element, Event, Node, is_void_element};

/// Flatten a document into the events that would rebuild it.
///
/// Void elements produce only a start tag, mirroring what the tokenizer
/// emits for them.
pub fn to_events(doc: &Document) -> Vec<Event> {
    let mut events = Vec::new();
    for node in &doc.children {
        push_node(node, &mut events);
    }
    events
}

fn push_node(node: &Node, events: &mut Vec<Event>) {
    match node {
        Node::Text(text) => events.push(Event::Text(text.clone())),
        Node::Element(el) => push_element(el, events),
    }
}

fn push_element(el: &Element, events: &mut Vec<Event>) {
    events.push(Event::StartTag {
        name: el.name.clone(),
        attrs: el.attrs.clone(),
    });
    if is_void_element(&el.name) {
        return;
    }
    for child in &el.children {
        push_node(child, events);
    }
    events.push(Event::EndTag {
        name: el.name.clone(),
    });
}
