//! Flat markup events consumed by the tree builder.

use super::Attribute;

/// One tokenizer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StartTag { name: String, attrs: Vec<Attribute> },
    EndTag { name: String },
    Text(String),
}

impl Event {
    pub fn start(name: impl Into<String>, attrs: Vec<Attribute>) -> Self {
        Event::StartTag {
            name: name.into(),
            attrs,
        }
    }

    pub fn end(name: impl Into<String>) -> Self {
        Event::EndTag { name: name.into() }
    }

    pub fn text(data: impl Into<String>) -> Self {
        Event::Text(data.into())
    }
}
