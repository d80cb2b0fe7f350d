use super::dijkstra::Graph;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid has no cells")]
    Empty,
    #[error("Row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Which neighbouring cells a path may step to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moves {
    RightDown,
    UpRightDown,
    FourWay,
}

impl Moves {
    fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Moves::RightDown => &[(0, 1), (1, 0)],
            Moves::UpRightDown => &[(-1, 0), (0, 1), (1, 0)],
            Moves::FourWay => &[(-1, 0), (0, 1), (1, 0), (0, -1)],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    TopLeft,
    LeftColumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    BottomRight,
    RightColumn,
}

impl<T> Grid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    fn neighbor(&self, row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < self.rows && c < self.cols).then_some((r, c))
    }
}

impl Grid<u64> {
    /// One node per cell; stepping into a cell costs that cell's value.
    pub fn to_graph(&self, moves: Moves) -> Graph {
        let mut graph = Graph::with_nodes(self.cells.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let from = self.index(row, col);
                for &offset in moves.offsets() {
                    if let Some((r, c)) = self.neighbor(row, col, offset) {
                        let to = self.index(r, c);
                        graph.add_edge(from, to, self.cells[to]);
                    }
                }
            }
        }
        graph
    }

    /// Minimal path sum, counting both the start and end cells.
    pub fn min_path_sum(&self, moves: Moves, start: Start, end: End) -> Option<u64> {
        let sources: Vec<(usize, u64)> = match start {
            Start::TopLeft => vec![(0, self.cells[0])],
            Start::LeftColumn => (0..self.rows)
                .map(|r| {
                    let i = self.index(r, 0);
                    (i, self.cells[i])
                })
                .collect(),
        };

        let dist = self.to_graph(moves).dijkstra(&sources);

        match end {
            End::BottomRight => dist[self.index(self.rows - 1, self.cols - 1)],
            End::RightColumn => (0..self.rows)
                .filter_map(|r| dist[self.index(r, self.cols - 1)])
                .min(),
        }
    }
}
