//! html5ever tokenizer front-end.
//!
//! Only the tokenizer is used, not html5ever's tree builder: the tree
//! builder would silently repair mismatched markup, while [`TreeBuilder`]
//! has to see the document exactly as written.
//!
//! [`TreeBuilder`]: super::TreeBuilder

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::TokenizerResult;

use super::{Attribute, Event, is_void_element};

/// TokenSink that records events.
///
/// Uses interior mutability (RefCell) because html5ever's TokenSink trait
/// takes `&self`.
#[derive(Default)]
struct EventSink {
    events: RefCell<Vec<Event>>,
}

impl EventSink {
    fn push_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();
        let mut events = self.events.borrow_mut();

        match tag.kind {
            TagKind::StartTag => {
                let attrs = tag
                    .attrs
                    .into_iter()
                    .map(|a| Attribute::new(a.name.local.to_string(), a.value.to_string()))
                    .collect();
                events.push(Event::start(name.clone(), attrs));

                // `<div/>` is a start tag immediately followed by its end tag
                if tag.self_closing && !is_void_element(&name) {
                    events.push(Event::end(name));
                    return TokenSinkResult::Continue;
                }
            }
            TagKind::EndTag => {
                events.push(Event::end(name));
                return TokenSinkResult::Continue;
            }
        }

        match &*tag.name {
            "script" => TokenSinkResult::RawData(RawKind::ScriptData),
            "style" => TokenSinkResult::RawData(RawKind::Rawtext),
            "textarea" | "title" => TokenSinkResult::RawData(RawKind::Rcdata),
            _ => TokenSinkResult::Continue,
        }
    }

    /// Character tokens arrive in pieces; merge them into one text event.
    fn push_text(&self, text: &str) {
        let mut events = self.events.borrow_mut();
        if let Some(Event::Text(last)) = events.last_mut() {
            last.push_str(text);
        } else {
            events.push(Event::Text(text.to_string()));
        }
    }
}

impl TokenSink for EventSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => self.push_tag(tag),
            Token::CharacterTokens(text) => {
                self.push_text(&text);
                TokenSinkResult::Continue
            }
            // Comments, doctypes, NULs and parse errors carry nothing we keep
            _ => TokenSinkResult::Continue,
        }
    }
}

/// Split markup into start-tag, end-tag and text events.
///
/// Tag and attribute names come out lowercased and character references
/// decoded. Adjacent text is coalesced.
pub fn tokenize(markup: &str) -> Vec<Event> {
    let tokenizer = Tokenizer::new(EventSink::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(markup));
    // The sink never pauses for scripts; resume anyway until the input is drained
    while let TokenizerResult::Script(_) = tokenizer.feed(&input) {}
    tokenizer.end();
    tokenizer.sink.events.into_inner()
}
