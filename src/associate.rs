//! Pair label cells with the image cells they illustrate.

use log::warn;

use crate::table::{CellKind, ImageAttributes, LogicalCell};

/// A sign or marking number with its illustrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignEntry {
    pub label: String,
    /// Sign name, when the table carries one.
    pub name: Option<String>,
    pub images: Vec<ImageAttributes>,
}

impl SignEntry {
    /// Whether the entry gets a page: a non-blank label and at least one image.
    pub fn is_publishable(&self) -> bool {
        !self.label.trim().is_empty() && !self.images.is_empty()
    }

    /// `"<label>."`, or `"<label>. <name>"` when named.
    pub fn title(&self) -> String {
        match &self.name {
            Some(name) => format!("{}. {}", self.label, name),
            None => format!("{}.", self.label),
        }
    }
}

/// Whether `image` belongs to `label`: its anchor row lies in the label's
/// rows and its columns lie entirely within the label's columns.
pub fn is_illustration_of(label: &LogicalCell, image: &LogicalCell) -> bool {
    label.rows.contains(image.rows.start) && label.cols.covers(&image.cols)
}

/// Pair every non-blank label with its images, in label order.
///
/// Images keep their encounter order. Labels without images are skipped.
pub fn associate(cells: &[LogicalCell]) -> impl Iterator<Item = SignEntry> + '_ {
    cells.iter().filter_map(move |label_cell| {
        let CellKind::Label(label) = &label_cell.kind else {
            return None;
        };
        if label.trim().is_empty() {
            return None;
        }

        let images: Vec<ImageAttributes> = cells
            .iter()
            .filter(|cell| is_illustration_of(label_cell, cell))
            .filter_map(|cell| cell.image().cloned())
            .collect();

        if images.is_empty() {
            warn!("dropping label {label:?}: no images");
            return None;
        }
        Some(SignEntry {
            label: label.clone(),
            name: None,
            images,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Attribute, parse_html};
    use crate::table::{CellRange, ResolveOptions, resolve_table};

    fn entries(rows: &str) -> Vec<SignEntry> {
        let doc = parse_html(&format!("<table><tbody>{rows}</tbody></table>")).unwrap();
        let grid =
            resolve_table(doc.find_by_tag("table").unwrap(), ResolveOptions::default()).unwrap();
        associate(&grid.cells).collect()
    }

    fn image(src: &str) -> ImageAttributes {
        vec![Attribute::new("src", src)]
    }

    fn cell(rows: (usize, usize), cols: (usize, usize), kind: CellKind) -> LogicalCell {
        LogicalCell {
            rows: CellRange::new(rows.0, rows.1),
            cols: CellRange::new(cols.0, cols.1),
            span_rows: CellRange::new(rows.0, rows.1),
            kind,
        }
    }

    #[test]
    fn test_colspan_label_collects_both_images() {
        let found = entries(
            r#"<tr><td><img src="/5.1a.png"></td><td><img src="/5.1b.png"></td></tr>
               <tr><td colspan="2">5.1</td></tr>"#,
        );
        assert_eq!(
            found,
            vec![SignEntry {
                label: "5.1".into(),
                name: None,
                images: vec![image("/5.1a.png"), image("/5.1b.png")],
            }]
        );
    }

    #[test]
    fn test_images_split_between_labels() {
        let found = entries(
            r#"<tr><td><img src="/a.png"></td><td><img src="/b.png"></td><td><img src="/c.png"></td></tr>
               <tr><td colspan="2">920</td><td>921</td></tr>"#,
        );
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].label, "920");
        assert_eq!(found[0].images, vec![image("/a.png"), image("/b.png")]);
        assert_eq!(found[1].label, "921");
        assert_eq!(found[1].images, vec![image("/c.png")]);
    }

    #[test]
    fn test_partial_column_overlap_not_paired() {
        let label = cell((1, 2), (0, 2), CellKind::Label("1".into()));
        let inside = cell((1, 2), (1, 2), CellKind::Image(image("/in.png")));
        let straddling = cell((1, 2), (1, 3), CellKind::Image(image("/out.png")));
        let wrong_row = cell((2, 3), (0, 1), CellKind::Image(image("/late.png")));

        assert!(is_illustration_of(&label, &inside));
        assert!(!is_illustration_of(&label, &straddling));
        assert!(!is_illustration_of(&label, &wrong_row));

        let cells = [label, inside, straddling, wrong_row];
        let found: Vec<_> = associate(&cells).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].images, vec![image("/in.png")]);
    }

    #[test]
    fn test_tall_label_row_range() {
        let label = cell((0, 3), (0, 1), CellKind::Label("7".into()));
        let first = cell((0, 1), (0, 1), CellKind::Image(image("/0.png")));
        let last = cell((2, 3), (0, 1), CellKind::Image(image("/2.png")));
        let after = cell((3, 4), (0, 1), CellKind::Image(image("/3.png")));

        assert!(is_illustration_of(&label, &first));
        assert!(is_illustration_of(&label, &last));
        assert!(!is_illustration_of(&label, &after));
    }

    #[test]
    fn test_blank_label_is_skipped() {
        let found = entries(
            r#"<tr><td><img src="/a.png"></td><td><img src="/b.png"></td></tr>
               <tr><td>  </td><td>6.2</td></tr>"#,
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].label, "6.2");
        assert_eq!(found[0].images, vec![image("/b.png")]);
    }

    #[test]
    fn test_label_without_images_is_dropped() {
        let found = entries("<tr><td>1</td><td>2</td></tr>");
        assert!(found.is_empty());
    }

    #[test]
    fn test_title() {
        let mut entry = SignEntry {
            label: "101".into(),
            name: None,
            images: vec![],
        };
        assert_eq!(entry.title(), "101.");
        assert!(!entry.is_publishable());
        entry.name = Some("Bīstams pagrieziens".into());
        entry.images.push(image("/a.png"));
        assert_eq!(entry.title(), "101. Bīstams pagrieziens");
        assert!(entry.is_publishable());
    }
}
