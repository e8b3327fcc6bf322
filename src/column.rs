//! The rolling working column.
//!
//! A [`WorkingColumn`] holds one column of the conceptual edit-distance
//! matrix: rows are positions in the row sequence `a`, columns are positions
//! in the column-driving sequence `b`. Only one column exists at a time, so
//! memory is `O(a.len())` regardless of `b.len()`.
//!
//! Cell `0` is the virtual first row (`D[0][j] = j`); it is never read as a
//! stored value because every sweep recomputes it from the column index.

/// Result of filling one column: the bottom cell and the column minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    /// `D[m][j]`: distance between all of `a` and the processed prefix of `b`.
    pub value: usize,
    /// Smallest cell of the column, virtual first row included.
    pub smallest: usize,
}

/// One column of the edit-distance matrix, updated in place.
#[derive(Debug, Clone)]
pub struct WorkingColumn<'a, T> {
    rows: &'a [T],
    cells: Vec<usize>,
}

impl<'a, T: PartialEq> WorkingColumn<'a, T> {
    /// Build the column for `b[0..1)` against every prefix of `rows`.
    ///
    /// The left neighbour of each cell is the border value `i + 1`, which is
    /// never smaller than the diagonal `i - 1 + cost`, so it is skipped.
    pub fn initial(rows: &'a [T], first: &T) -> (Self, Sweep) {
        let mut cells = Vec::with_capacity(rows.len() + 1);
        cells.push(1);
        let mut smallest = 1;
        for (i, unit) in rows.iter().enumerate() {
            let cost = usize::from(unit != first);
            let value = (cells[i] + 1).min(i + cost);
            smallest = smallest.min(value);
            cells.push(value);
        }
        let value = cells[rows.len()];
        (Self { rows, cells }, Sweep { value, smallest })
    }

    /// Advance from column `j - 1` to column `j`, where `unit == b[j - 1]`
    /// and `j >= 2`.
    ///
    /// Each cell is written one row behind the read position so that it is
    /// consumed as the diagonal predecessor before being replaced.
    pub fn sweep(&mut self, j: usize, unit: &T) -> Sweep {
        let mut above = j;
        let mut smallest = above;
        for (i, row_unit) in self.rows.iter().enumerate() {
            let cost = usize::from(row_unit != unit);
            let diag = self.cells[i];
            let left = self.cells[i + 1];
            let value = (diag + cost).min(above + 1).min(left + 1);
            self.cells[i] = above;
            above = value;
            smallest = smallest.min(value);
        }
        let last = self.rows.len();
        self.cells[last] = above;
        Sweep {
            value: above,
            smallest,
        }
    }

    /// Number of rows in the row sequence (the column holds one more cell).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Snapshot of the current column, virtual first row included.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }
}
