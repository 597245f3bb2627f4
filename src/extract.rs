//! End-to-end extraction: markup in, sign entries out.

use log::{debug, info, warn};

use crate::associate::{SignEntry, associate};
use crate::config::Config;
use crate::dom::{Document, Element, Node, parse_html};
use crate::error::{Error, Result};
use crate::sections::split_sections;
use crate::table::{ResolveOptions, resolve_sign_table, resolve_table};

/// Tables of a section, skipping explanatory paragraphs.
fn section_tables(section: &[Node]) -> impl Iterator<Item = Result<&Element>> {
    section.iter().filter_map(|node| match node {
        Node::Text(text) if text.trim().is_empty() => None,
        Node::Element(el) if el.is("p") => None,
        Node::Element(el) if el.is("table") => Some(Ok(el)),
        Node::Element(el) => Some(Err(Error::shape(format!(
            "expected <table> or <p> in section, found <{}>",
            el.name
        )))),
        Node::Text(text) => Some(Err(Error::shape(format!(
            "unexpected text {text:?} in section"
        )))),
    })
}

/// Entries of the sign section, one per publishable sign.
pub fn extract_signs(section: &[Node]) -> Result<Vec<SignEntry>> {
    let mut entries = Vec::new();
    for table in section_tables(section) {
        let resolved = resolve_sign_table(table?)?;
        debug!("sign table: {} rows", resolved.len());
        entries.extend(resolved.into_iter().filter(|entry| {
            if entry.label.trim().is_empty() {
                debug!("skipping sign row with a blank number");
                false
            } else if entry.images.is_empty() {
                warn!("dropping sign {:?}: no images", entry.label);
                false
            } else {
                true
            }
        }));
    }
    Ok(entries)
}

/// Entries of the marking section, resolved through the logical grid.
pub fn extract_markings(section: &[Node]) -> Result<Vec<SignEntry>> {
    let mut entries = Vec::new();
    for table in section_tables(section) {
        let grid = resolve_table(table?, ResolveOptions::default())?;
        debug!(
            "marking table: {} cells in a {}x{} grid",
            grid.cells.len(),
            grid.row_count,
            grid.column_count
        );
        entries.extend(associate(&grid.cells));
    }
    Ok(entries)
}

/// Signs first, then markings, each in page order.
pub fn extract_entries(doc: &Document, config: &Config) -> Result<Vec<SignEntry>> {
    let (sign_section, marking_section) = split_sections(doc, config)?;

    let mut entries = extract_signs(sign_section)?;
    let sign_count = entries.len();
    entries.extend(extract_markings(marking_section)?);

    info!(
        "extracted {} signs and {} markings",
        sign_count,
        entries.len() - sign_count
    );
    Ok(entries)
}

/// Parse `markup` and extract its entries.
pub fn extract_from_html(markup: &str, config: &Config) -> Result<Vec<SignEntry>> {
    let doc = parse_html(markup)?;
    extract_entries(&doc, config)
}
