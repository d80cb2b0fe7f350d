use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SIZE: usize = 9;
pub const CELLS: usize = SIZE * SIZE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("Expected {expected} rows, found {found}")]
    WrongRowCount { expected: usize, found: usize },
    #[error("Row {row} has {found} cells, expected 9")]
    WrongRowLength { row: usize, found: usize },
    #[error("Invalid character '{ch}' in row {row}")]
    InvalidCharacter { row: usize, ch: char },
}

/// A 9×9 board, row-major, with 0 marking an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [0; CELLS] }
    }

    /// Returns `None` if any value is above 9.
    pub fn from_cells(cells: [u8; CELLS]) -> Option<Self> {
        cells.iter().all(|&d| d <= 9).then_some(Self { cells })
    }

    /// Parses nine rows of nine cells each. `0` and `.` mark empty cells.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardParseError> {
        if rows.len() != SIZE {
            return Err(BoardParseError::WrongRowCount {
                expected: SIZE,
                found: rows.len(),
            });
        }
        let mut cells = [0u8; CELLS];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref().trim();
            let count = row.chars().count();
            if count != SIZE {
                return Err(BoardParseError::WrongRowLength {
                    row: r,
                    found: count,
                });
            }
            for (c, ch) in row.chars().enumerate() {
                cells[r * SIZE + c] = parse_cell(ch).ok_or(BoardParseError::InvalidCharacter {
                    row: r,
                    ch,
                })?;
            }
        }
        Ok(Self { cells })
    }

    #[inline]
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * SIZE + col]
    }

    pub fn givens(&self) -> usize {
        self.cells.iter().filter(|&&d| d != 0).count()
    }

    /// No digit repeats within any row, column or box. Empty cells are ignored.
    pub fn is_consistent(&self) -> bool {
        (0..SIZE).all(|i| {
            let row = std::array::from_fn::<usize, SIZE, _>(|k| i * SIZE + k);
            let col = std::array::from_fn::<usize, SIZE, _>(|k| k * SIZE + i);
            let (br, bc) = (i / 3 * 3, i % 3 * 3);
            let square = std::array::from_fn::<usize, SIZE, _>(|k| (br + k / 3) * SIZE + bc + k % 3);
            [row, col, square].iter().all(|unit| self.unit_has_no_repeats(unit))
        })
    }

    fn unit_has_no_repeats(&self, unit: &[usize; SIZE]) -> bool {
        let mut seen = 0u16;
        for &i in unit {
            let d = self.cells[i];
            if d == 0 {
                continue;
            }
            if seen & (1 << d) != 0 {
                return false;
            }
            seen |= 1 << d;
        }
        true
    }

    pub fn is_solved(&self) -> bool {
        self.givens() == CELLS && self.is_consistent()
    }

    /// The three digits in the top-left corner read as one number.
    pub fn top_left_number(&self) -> u32 {
        self.cells[..3]
            .iter()
            .fold(0, |acc, &d| acc * 10 + d as u32)
    }
}

fn parse_cell(ch: char) -> Option<u8> {
    match ch {
        '.' => Some(0),
        '0'..='9' => ch.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Accepts either nine lines or one 81-character line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() == 1 && lines[0].chars().count() == CELLS {
            let line = lines[0];
            let rows: Vec<String> = (0..SIZE)
                .map(|r| line.chars().skip(r * SIZE).take(SIZE).collect())
                .collect();
            return Self::from_rows(&rows);
        }
        Self::from_rows(&lines)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(SIZE).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for d in row {
                write!(f, "{}", d)?;
            }
        }
        Ok(())
    }
}
