//! Table geometry resolver.
//!
//! Rebuilds the logical grid of a table that merges cells with `rowspan` and
//! `colspan`, and records where each label and each image sits in it.
//!
//! Images are anchored one row *below* their vertical span: an image cell in
//! row `r` with `rowspan = n` lands in row `r + n`. In the marking tables the
//! images stand above the numbers they illustrate, so the anchor row is the
//! row of the label the image belongs to.
//!
//! ```text
//! row 0 | [img a] | [img b] |      img a -> rows [1, 2), cols [0, 1)
//! row 1 |       "5.1"       |      img b -> rows [1, 2), cols [1, 2)
//!                                  "5.1" -> rows [1, 2), cols [0, 2)
//! ```

use log::trace;

use super::{CellContent, ImageAttributes, cell_content, cell_spans, row_cells, table_rows};
use crate::dom::Element;
use crate::error::{Error, Result};

/// Half-open interval `[start, end)` of grid rows or columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub start: usize,
    pub end: usize,
}

impl CellRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn covers(&self, other: &CellRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// What a resolved cell holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    Label(String),
    Image(ImageAttributes),
}

/// A cell placed in the logical grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalCell {
    /// Rows the cell is matched against. For images this is the anchor row.
    pub rows: CellRange,
    pub cols: CellRange,
    /// Rows the cell physically covers, `[row, row + rowspan)`.
    pub span_rows: CellRange,
    pub kind: CellKind,
}

impl LogicalCell {
    /// Number of grid slots the cell physically covers.
    pub fn area(&self) -> usize {
        self.span_rows.len() * self.cols.len()
    }

    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            CellKind::Label(text) => Some(text),
            CellKind::Image(_) => None,
        }
    }

    pub fn image(&self) -> Option<&ImageAttributes> {
        match &self.kind {
            CellKind::Image(attrs) => Some(attrs),
            CellKind::Label(_) => None,
        }
    }
}

/// Resolver policy.
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    /// Reject labels with `rowspan` other than 1. When off, a label covers
    /// `[row, row + rowspan)`.
    pub single_row_labels: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            single_row_labels: true,
        }
    }
}

/// All cells of one table, plus the size of its grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub cells: Vec<LogicalCell>,
    pub row_count: usize,
    pub column_count: usize,
}

/// For each column seen so far, how many more rows a cell from an earlier
/// row still covers.
#[derive(Debug, Default)]
struct ColumnOccupancy {
    pending: Vec<usize>,
}

impl ColumnOccupancy {
    /// Step over columns held by cells spanning down from earlier rows.
    fn skip_covered(&mut self, column: &mut usize) {
        while let Some(pending) = self.pending.get_mut(*column)
            && *pending > 0
        {
            *pending -= 1;
            *column += 1;
        }
    }

    /// Claim `cols` for a cell spanning `rowspan` rows starting at `row`.
    fn occupy(&mut self, row: usize, cols: CellRange, rowspan: usize) -> Result<()> {
        for column in cols.start..cols.end {
            if column == self.pending.len() {
                self.pending.push(rowspan - 1);
            } else if self.pending[column] == 0 {
                self.pending[column] = rowspan - 1;
            } else {
                return Err(Error::SpanOverlap { row, column });
            }
        }
        Ok(())
    }

    /// Columns right of the last explicit cell must be covered from above.
    fn finish_row(&mut self, row: usize, mut column: usize) -> Result<()> {
        while let Some(pending) = self.pending.get_mut(column) {
            if *pending == 0 {
                return Err(Error::UncoveredColumn { row, column });
            }
            *pending -= 1;
            column += 1;
        }
        Ok(())
    }
}

fn span_range(start: usize, len: usize) -> Result<CellRange> {
    let end = start
        .checked_add(len)
        .ok_or_else(|| Error::shape(format!("span of {len} from {start} overflows")))?;
    Ok(CellRange::new(start, end))
}

/// Resolve the cells of a `<table>` element.
pub fn resolve_table(table: &Element, options: ResolveOptions) -> Result<Grid> {
    let rows = table_rows(table)?;
    resolve_rows(&rows, options)
}

/// Resolve a sequence of `<tr>` rows into logical cells, in encounter order.
pub fn resolve_rows(rows: &[&Element], options: ResolveOptions) -> Result<Grid> {
    let mut columns = ColumnOccupancy::default();
    let mut cells = Vec::new();

    for (row, tr) in rows.iter().enumerate() {
        let mut column = 0;

        for td in row_cells(tr)? {
            columns.skip_covered(&mut column);

            let spans = cell_spans(td)?;
            let cols = span_range(column, spans.colspan)?;
            let span_rows = span_range(row, spans.rowspan)?;

            let cell = match cell_content(td)? {
                CellContent::Text(text) => {
                    if options.single_row_labels && spans.rowspan != 1 {
                        return Err(Error::shape(format!(
                            "label {text:?} in row {row} spans {} rows",
                            spans.rowspan
                        )));
                    }
                    LogicalCell {
                        rows: span_rows,
                        cols,
                        span_rows,
                        kind: CellKind::Label(text.to_string()),
                    }
                }
                CellContent::Image(attrs) => {
                    LogicalCell {
                        rows: span_range(span_rows.end, 1)?,
                        cols,
                        span_rows,
                        kind: CellKind::Image(attrs.to_vec()),
                    }
                }
            };
            trace!("row {row}: {:?} at cols {:?}", cell.kind, cell.cols);
            cells.push(cell);

            columns.occupy(row, cols, spans.rowspan)?;
            column = cols.end;
        }

        columns.finish_row(row, column)?;
    }

    Ok(Grid {
        cells,
        row_count: rows.len(),
        column_count: columns.pending.len(),
    })
}
