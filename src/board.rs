use std::fmt;

use crate::CellCoord;
use crate::CellKind;

/// A square grid of cell kinds.
///
/// Cells are stored row-major, so cell `(row, col)` lives at `row * size + col`. A fresh board
/// is all zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Side length of the board, in cells
    size: usize,

    cells: Vec<CellKind>,
}

impl Board {
    /// Create an empty `size x size` board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Set every cell back to 0
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Read the cell at `(row, col)`. Returns `None` if the coordinates are off the board.
    pub fn get(&self, row: CellCoord, col: CellCoord) -> Option<CellKind> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Write `kind` at `(row, col)`. Returns `false`, and leaves the board untouched, if the
    /// coordinates are off the board.
    pub fn set(&mut self, row: CellCoord, col: CellCoord, kind: CellKind) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Whether `(row, col)` lies on the board
    pub fn contains(&self, row: CellCoord, col: CellCoord) -> bool {
        self.index(row, col).is_some()
    }

    /// Iterate over the rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        // `chunks_exact` panics on a zero chunk size
        self.cells.chunks_exact(self.size.max(1))
    }

    /// The raw cells, in row-major order
    pub fn as_slice(&self) -> &[CellKind] {
        &self.cells
    }

    fn index(&self, row: CellCoord, col: CellCoord) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.size)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.size)?;

        Some(row * self.size + col)
    }
}

/// One line per row, cells separated by a space.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for (j, kind) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }

                write!(f, "{kind}")?;
            }
        }

        Ok(())
    }
}
