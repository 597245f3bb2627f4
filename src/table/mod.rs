//! Shape checks shared by the table resolvers.
//!
//! Both resolvers walk `<table><tbody><tr><td>` and read a cell's content
//! as either a text label or a single image, optionally wrapped in one
//! `<p>`. Whitespace-only text between structural elements is ignored;
//! anything else out of place is an error.

pub mod grid;
pub mod signs;

pub use grid::{CellKind, CellRange, Grid, LogicalCell, ResolveOptions, resolve_rows, resolve_table};
pub use signs::resolve_sign_table;

use crate::dom::{Attribute, Element, Node};
use crate::error::{Error, Result};

/// Attributes of one `<img>`, in source order.
pub type ImageAttributes = Vec<Attribute>;

/// What a single table cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent<'a> {
    Text(&'a str),
    Image(&'a [Attribute]),
}

/// Declared spans of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spans {
    pub rowspan: usize,
    pub colspan: usize,
}

/// Element children of `parent`, skipping whitespace-only text.
fn child_elements<'a>(parent: &'a Element, expected: &str) -> Result<Vec<&'a Element>> {
    parent
        .children
        .iter()
        .filter(|node| !node.is_blank_text())
        .map(|node| node.expect_element(expected))
        .collect()
}

/// The `<tr>` rows of a table, which must have exactly one `<tbody>`.
pub fn table_rows(table: &Element) -> Result<Vec<&Element>> {
    let bodies = child_elements(table, "tbody")?;
    let [tbody] = bodies.as_slice() else {
        return Err(Error::shape(format!(
            "expected exactly one <tbody>, found {}",
            bodies.len()
        )));
    };
    child_elements(tbody, "tr")
}

/// The `<td>` cells of a row.
pub fn row_cells(row: &Element) -> Result<Vec<&Element>> {
    child_elements(row, "td")
}

/// Largest `rowspan` HTML allows.
pub const MAX_ROWSPAN: usize = 65534;
/// Largest `colspan` HTML allows.
pub const MAX_COLSPAN: usize = 1000;

fn span_attr(cell: &Element, attr: &'static str, max: usize) -> Result<usize> {
    let Some(value) = cell.attr(attr) else {
        return Ok(1);
    };
    match value.trim().parse::<usize>() {
        Ok(0) => Err(Error::ZeroSpan { attr }),
        Ok(span) if span <= max => Ok(span),
        _ => Err(Error::InvalidSpan {
            attr,
            value: value.to_string(),
        }),
    }
}

/// Read `rowspan` and `colspan`, both defaulting to 1 and bounded by
/// [`MAX_ROWSPAN`] and [`MAX_COLSPAN`].
pub fn cell_spans(cell: &Element) -> Result<Spans> {
    Ok(Spans {
        rowspan: span_attr(cell, "rowspan", MAX_ROWSPAN)?,
        colspan: span_attr(cell, "colspan", MAX_COLSPAN)?,
    })
}

/// The single text run or image inside a cell.
///
/// `<td>x</td>`, `<td><p>x</p></td>`, `<td><img></td>` and
/// `<td><p><img></p></td>` are the only accepted forms.
pub fn cell_content(cell: &Element) -> Result<CellContent<'_>> {
    let child = single_child(cell)?;
    let child = match child {
        Node::Element(p) if p.is("p") => single_child(p)?,
        other => other,
    };
    match child {
        Node::Text(text) => Ok(CellContent::Text(text)),
        Node::Element(img) if img.is("img") => Ok(CellContent::Image(&img.attrs)),
        Node::Element(el) => Err(Error::shape(format!(
            "expected text or <img> in cell, found <{}>",
            el.name
        ))),
    }
}

fn single_child(el: &Element) -> Result<&Node> {
    match el.children.as_slice() {
        [child] => Ok(child),
        children => Err(Error::shape(format!(
            "expected one child in <{}>, found {}",
            el.name,
            children.len()
        ))),
    }
}
