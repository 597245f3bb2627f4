//! Locate the sign and marking sections inside the regulations page.
//!
//! The document text lives in a single `<div class="doc-body">`, whose
//! children are a flat run of `<div>` blocks. A block whose only text is a
//! section heading announces that the *next* block holds that section's
//! tables.

use log::debug;

use crate::config::Config;
use crate::dom::{Document, Node};
use crate::error::{Error, Result};

/// Children of the first `<div class="{class}">`, depth-first.
pub fn document_body<'a>(doc: &'a Document, class: &str) -> Result<&'a [Node]> {
    doc.find(|el| el.is("div") && el.attr("class") == Some(class))
        .map(|el| el.children.as_slice())
        .ok_or_else(|| Error::MissingBody {
            class: class.to_string(),
        })
}

/// Lazy walk over the body blocks, yielding the content of each block that
/// follows a heading block.
pub struct Sections<'a> {
    nodes: std::slice::Iter<'a, Node>,
    config: &'a Config,
    interesting: bool,
}

impl<'a> Sections<'a> {
    pub fn new(body: &'a [Node], config: &'a Config) -> Self {
        Self {
            nodes: body.iter(),
            config,
            interesting: false,
        }
    }

    fn fail(&mut self, err: Error) -> Option<Result<&'a [Node]>> {
        self.nodes = Default::default();
        Some(Err(err))
    }
}

impl<'a> Iterator for Sections<'a> {
    type Item = Result<&'a [Node]>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.nodes.next() {
            let block = match node {
                Node::Text(text) if text.trim().is_empty() => continue,
                Node::Text(text) => {
                    return self.fail(Error::shape(format!(
                        "unexpected text {text:?} between document blocks"
                    )));
                }
                Node::Element(el) if el.is("div") => el,
                Node::Element(el) => {
                    return self.fail(Error::shape(format!(
                        "expected <div> document block, found <{}>",
                        el.name
                    )));
                }
            };

            let section = if self.interesting {
                self.interesting = false;
                Some(block.children.as_slice())
            } else {
                None
            };

            let mut texts = block.text_children();
            if let (Some(text), None) = (texts.next(), texts.next())
                && self.config.is_section_marker(text)
            {
                debug!("found section heading {text:?}");
                self.interesting = true;
            }

            if section.is_some() {
                return section.map(Ok);
            }
        }
        None
    }
}

/// The sign section and the marking section, in that order.
///
/// Fails unless the page has exactly two heading-delimited sections.
pub fn split_sections<'a>(
    doc: &'a Document,
    config: &'a Config,
) -> Result<(&'a [Node], &'a [Node])> {
    let body = document_body(doc, &config.body_class)?;
    let mut sections = Sections::new(body, config);

    let signs = sections.next().transpose()?;
    let markings = sections.next().transpose()?;
    let (Some(signs), Some(markings)) = (signs, markings) else {
        let found = usize::from(signs.is_some()) + usize::from(markings.is_some());
        return Err(Error::SectionCount { found });
    };

    let mut extra = 0;
    for section in sections {
        section?;
        extra += 1;
    }
    if extra > 0 {
        return Err(Error::SectionCount { found: 2 + extra });
    }

    Ok((signs, markings))
}
