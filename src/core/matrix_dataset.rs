use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::core::Dataset;
use crate::error::{ChartError, ChartResult};

/// Sparse, auto-growing 2-D dataset addressed by `(row, col)`.
///
/// Every cell inside `row_size() x col_size()` holds either a value or the
/// empty sentinel (`None`). Writes outside the current extent grow the grid
/// to exactly the requested index; the extent never shrinks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixDataset<T> {
    title: Option<String>,
    rows: Vec<Vec<Option<T>>>,
    col_count: usize,
}

impl<T> Default for MatrixDataset<T> {
    fn default() -> Self {
        Self {
            title: None,
            rows: Vec::new(),
            col_count: 0,
        }
    }
}

impl<T> MatrixDataset<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates a dataset already grown to `rows x cols`, every cell empty.
    ///
    /// # Panics
    ///
    /// Panics when the grid cannot be allocated, e.g. an extent whose cell
    /// count overflows `isize::MAX` bytes.
    #[must_use]
    pub fn with_extent(rows: usize, cols: usize) -> Self {
        let mut dataset = Self::default();
        if rows > 0 && cols > 0 {
            dataset.grow_to(rows - 1, cols - 1);
        } else {
            // Degenerate extents still record the non-zero side.
            dataset.col_count = cols;
            dataset.rows.resize_with(rows, Vec::new);
        }
        debug!(rows, cols, "create matrix dataset with extent");
        dataset
    }

    #[must_use]
    pub fn row_size(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn col_size(&self) -> usize {
        self.col_count
    }

    /// Stores `data` at `(row, col)`, growing the grid first when needed.
    ///
    /// Passing `None` clears the cell. Negative coordinates are rejected and
    /// leave the extent unchanged.
    ///
    /// # Panics
    ///
    /// Growth itself never fails, but panics when the grown grid cannot be
    /// allocated, e.g. a column index near `isize::MAX`.
    pub fn put(&mut self, row: isize, col: isize, data: impl Into<Option<T>>) -> ChartResult<()> {
        let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
            warn!(row, col, "rejecting matrix write with negative coordinate");
            return Err(ChartError::InvalidArgument(format!(
                "matrix coordinates must be non-negative: row={row}, col={col}"
            )));
        };

        self.grow_to(r, c);
        self.rows[r][c] = data.into();
        Ok(())
    }

    /// Returns the cell at `(row, col)`; `Ok(None)` is an empty cell.
    pub fn get(&self, row: isize, col: isize) -> ChartResult<Option<&T>> {
        self.cell(row, col)
            .map(Option::as_ref)
            .ok_or(ChartError::IndexOutOfBounds {
                row,
                col,
                rows: self.row_size(),
                cols: self.col_size(),
            })
    }

    /// Rows in index order, each exactly `col_size()` cells wide.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Option<T>]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Number of cells holding a value.
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    fn cell(&self, row: isize, col: isize) -> Option<&Option<T>> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.rows.get(row)?.get(col)
    }

    fn grow_to(&mut self, row: usize, col: usize) {
        // Columns first so rows appended below are created at the final width.
        if col >= self.col_count {
            let col_count = col + 1;
            for cells in &mut self.rows {
                cells.resize_with(col_count, || None);
            }
            trace!(from = self.col_count, to = col_count, "grow matrix columns");
            self.col_count = col_count;
        }

        if row >= self.rows.len() {
            let row_count = row + 1;
            let col_count = self.col_count;
            trace!(from = self.rows.len(), to = row_count, "grow matrix rows");
            self.rows.resize_with(row_count, || empty_row(col_count));
        }
    }
}

fn empty_row<T>(cols: usize) -> Vec<Option<T>> {
    let mut row = Vec::with_capacity(cols);
    row.resize_with(cols, || None);
    row
}

impl<T> Dataset for MatrixDataset<T> {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_growth_backfills_existing_rows() {
        let mut dataset = MatrixDataset::<u8>::new();
        dataset.put(1, 0, 1_u8).expect("put");
        dataset.put(0, 3, 2_u8).expect("put");

        assert!(dataset.rows().all(|row| row.len() == 4));
        assert_eq!(dataset.filled_cells(), 2);
    }

    #[test]
    fn degenerate_extent_keeps_non_zero_side() {
        let dataset = MatrixDataset::<u8>::with_extent(0, 3);
        assert_eq!((dataset.row_size(), dataset.col_size()), (0, 3));

        let dataset = MatrixDataset::<u8>::with_extent(2, 0);
        assert_eq!((dataset.row_size(), dataset.col_size()), (2, 0));
        assert!(dataset.get(1, 0).is_err());
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn unallocatable_growth_panics() {
        let mut dataset = MatrixDataset::<u8>::new();
        let _ = dataset.put(0, isize::MAX, 1_u8);
    }
}
