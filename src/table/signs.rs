//! Row-grouping resolver for the road sign tables.
//!
//! Sign tables have three columns: number, image, name. A sign with several
//! illustrations repeats only the image column, the number and name cells
//! spanning down over the extra rows:
//!
//! ```text
//! | 101 (rowspan=2) | [img]  | Name (rowspan=2) |
//! |                 | [img]  |                  |
//! ```
//!
//! Here the image shares a row with its number, which the anchoring used by
//! [`super::grid`] would not pair, so these tables are grouped row by row.

use log::debug;

use super::{CellContent, ImageAttributes, cell_content, cell_spans, row_cells, table_rows};
use crate::associate::SignEntry;
use crate::dom::Element;
use crate::error::{Error, Result};

/// Resolve a sign table into one entry per number, in table order.
///
/// Entries are returned as found, including ones with a blank number or no
/// images; filtering is left to the caller.
pub fn resolve_sign_table(table: &Element) -> Result<Vec<SignEntry>> {
    let mut entries: Vec<SignEntry> = Vec::new();
    // Rows still covered by the current number/name cells
    let mut rows_left = 0;
    // Rows still covered by the current image cell
    let mut image_rows_left = 0;

    for (row, tr) in table_rows(table)?.into_iter().enumerate() {
        let cells = row_cells(tr)?;

        if rows_left == 0 {
            let [number, image, name] = cells.as_slice() else {
                return Err(Error::shape(format!(
                    "sign row {row} should have 3 cells, found {}",
                    cells.len()
                )));
            };
            let (rowspan, label) = text_cell(number)?;
            let (name_rowspan, name) = text_cell(name)?;
            if rowspan != name_rowspan {
                return Err(Error::shape(format!(
                    "sign {label:?}: number spans {rowspan} rows but name spans {name_rowspan}"
                )));
            }
            let (image_rowspan, image) = image_cell(image, rowspan)?;

            entries.push(SignEntry {
                label: label.to_string(),
                name: Some(name.to_string()),
                images: image.into_iter().collect(),
            });
            rows_left = rowspan - 1;
            image_rows_left = image_rowspan - 1;
            continue;
        }

        rows_left -= 1;
        if image_rows_left > 0 {
            if !cells.is_empty() {
                return Err(Error::shape(format!(
                    "sign row {row} is covered by the image above but has {} cells",
                    cells.len()
                )));
            }
            image_rows_left -= 1;
            continue;
        }

        let [image] = cells.as_slice() else {
            return Err(Error::shape(format!(
                "sign continuation row {row} should have 1 cell, found {}",
                cells.len()
            )));
        };
        let (image_rowspan, image) = image_cell(image, rows_left + 1)?;
        if let (Some(entry), Some(image)) = (entries.last_mut(), image) {
            entry.images.push(image);
        }
        image_rows_left = image_rowspan - 1;
    }

    if rows_left > 0 {
        return Err(Error::shape(format!(
            "sign table ends with {rows_left} rows still spanned"
        )));
    }

    debug!("resolved {} sign rows", entries.len());
    Ok(entries)
}

/// A number or name cell: text, no `colspan`.
fn text_cell(cell: &Element) -> Result<(usize, &str)> {
    reject_colspan(cell)?;
    let spans = cell_spans(cell)?;
    match cell_content(cell)? {
        CellContent::Text(text) => Ok((spans.rowspan, text)),
        CellContent::Image(_) => Err(Error::shape("expected text in sign number or name cell")),
    }
}

/// An image cell: no `colspan`, and a `rowspan` within the sign's rows.
///
/// A cell holding text instead of an image contributes no image.
fn image_cell(cell: &Element, max_rowspan: usize) -> Result<(usize, Option<ImageAttributes>)> {
    reject_colspan(cell)?;
    let spans = cell_spans(cell)?;
    if spans.rowspan > max_rowspan {
        return Err(Error::shape(format!(
            "image cell spans {} rows, past the {max_rowspan} rows of its sign",
            spans.rowspan
        )));
    }
    match cell_content(cell)? {
        CellContent::Image(attrs) => Ok((spans.rowspan, Some(attrs.to_vec()))),
        CellContent::Text(text) => {
            debug!("sign image cell holds text {text:?}");
            Ok((spans.rowspan, None))
        }
    }
}

fn reject_colspan(cell: &Element) -> Result<()> {
    if cell.has_attr("colspan") {
        return Err(Error::shape("colspan is not allowed in sign tables"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Attribute, parse_html};

    fn signs(rows: &str) -> Result<Vec<SignEntry>> {
        let doc = parse_html(&format!("<table><tbody>{rows}</tbody></table>")).unwrap();
        resolve_sign_table(doc.find_by_tag("table").unwrap())
    }

    fn srcs(entry: &SignEntry) -> Vec<&str> {
        entry
            .images
            .iter()
            .filter_map(|attrs| attrs.iter().find(|a| a.name == "src"))
            .map(|a| a.value.as_str())
            .collect()
    }

    #[test]
    fn test_single_row_signs() {
        let entries = signs(
            r#"<tr><td>101</td><td><img src="/101.png"></td><td>Bīstams pagrieziens</td></tr>
               <tr><td><p>102</p></td><td><p><img src="/102.png"></p></td><td><p>Līkums</p></td></tr>"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "101");
        assert_eq!(entries[0].name.as_deref(), Some("Bīstams pagrieziens"));
        assert_eq!(srcs(&entries[0]), vec!["/101.png"]);
        assert_eq!(entries[1].label, "102");
        assert_eq!(srcs(&entries[1]), vec!["/102.png"]);
    }

    #[test]
    fn test_continuation_rows_add_images() {
        let entries = signs(
            r#"<tr><td rowspan="3">201</td><td><img src="/a.png"></td><td rowspan="3">Name</td></tr>
               <tr><td><img src="/b.png"></td></tr>
               <tr><td><img src="/c.png"></td></tr>
               <tr><td>202</td><td><img src="/d.png"></td><td>Other</td></tr>"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(srcs(&entries[0]), vec!["/a.png", "/b.png", "/c.png"]);
        assert_eq!(srcs(&entries[1]), vec!["/d.png"]);
    }

    #[test]
    fn test_tall_image_covers_continuation_row() {
        let entries = signs(
            r#"<tr><td rowspan="2">NUM1</td><td rowspan="2"><img src="/a.png"></td><td rowspan="2">Name One</td></tr>
               <tr></tr>"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "NUM1");
        assert_eq!(entries[0].images, vec![vec![Attribute::new("src", "/a.png")]]);
    }

    #[test]
    fn test_short_image_span_inside_group() {
        let entries = signs(
            r#"<tr><td rowspan="3">401</td><td rowspan="2"><img src="/a.png"></td><td rowspan="3">Name</td></tr>
               <tr></tr>
               <tr><td><img src="/b.png"></td></tr>"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(srcs(&entries[0]), vec!["/a.png", "/b.png"]);
    }

    #[test]
    fn test_spanning_image_on_continuation_row() {
        let entries = signs(
            r#"<tr><td rowspan="3">402</td><td><img src="/a.png"></td><td rowspan="3">Name</td></tr>
               <tr><td rowspan="2"><img src="/b.png"></td></tr>
               <tr></tr>
               <tr><td>403</td><td><img src="/c.png"></td><td>Other</td></tr>"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(srcs(&entries[0]), vec!["/a.png", "/b.png"]);
        assert_eq!(srcs(&entries[1]), vec!["/c.png"]);
    }

    #[test]
    fn test_image_span_past_group_rejected() {
        let err = signs(
            r#"<tr><td rowspan="2">1</td><td rowspan="3"><img src="/a.png"></td><td rowspan="2">N</td></tr>
               <tr></tr>
               <tr></tr>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));

        let err = signs(
            r#"<tr><td rowspan="3">1</td><td><img src="/a.png"></td><td rowspan="3">N</td></tr>
               <tr><td rowspan="3"><img src="/b.png"></td></tr>
               <tr></tr>
               <tr></tr>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn test_text_in_image_cell_adds_nothing() {
        let entries = signs("<tr><td>301</td><td> </td><td>Name</td></tr>").unwrap();
        assert!(entries[0].images.is_empty());
    }

    #[test]
    fn test_mismatched_spans() {
        let err = signs(
            r#"<tr><td rowspan="2">1</td><td><img src="/a.png"></td><td>Name</td></tr>
               <tr><td><img src="/b.png"></td></tr>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn test_colspan_rejected() {
        let err = signs(
            r#"<tr><td colspan="2">1</td><td><img src="/a.png"></td><td>Name</td></tr>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));

        let err = signs(
            r#"<tr><td>1</td><td colspan="1"><img src="/a.png"></td><td>Name</td></tr>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn test_unexpected_cell_counts() {
        let err = signs(r#"<tr><td>1</td><td>Name</td></tr>"#).unwrap_err();
        assert!(matches!(err, Error::Shape(_)));

        let err = signs(
            r#"<tr><td rowspan="2">1</td><td><img src="/a.png"></td><td rowspan="2">N</td></tr>
               <tr><td>2</td><td><img src="/b.png"></td><td>M</td></tr>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn test_covered_row_must_be_empty() {
        let err = signs(
            r#"<tr><td rowspan="2">1</td><td rowspan="2"><img src="/a.png"></td><td rowspan="2">N</td></tr>
               <tr><td><img src="/b.png"></td></tr>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn test_table_ending_inside_span() {
        let err = signs(
            r#"<tr><td rowspan="3">1</td><td><img src="/a.png"></td><td rowspan="3">N</td></tr>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }
}
