use super::error::{FixtureError, FixtureParseErrorKind};
use super::traits::FixtureFile;
use crate::core::sudoku::Board;
use std::io::BufRead;

/// A labelled puzzle from a Sudoku fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledBoard {
    pub label: String,
    pub board: Board,
}

/// Blocks of a `Grid NN` header line followed by nine rows of digits, 0 for empty.
pub struct SudokuFile;

struct PendingBlock {
    label: String,
    header_line: usize,
    rows: Vec<String>,
}

impl PendingBlock {
    fn finish(self) -> Result<LabelledBoard, FixtureError> {
        let board = Board::from_rows(&self.rows)
            .map_err(|e| FixtureError::parse(self.header_line, FixtureParseErrorKind::Board(e)))?;
        Ok(LabelledBoard {
            label: self.label,
            board,
        })
    }
}

impl FixtureFile for SudokuFile {
    type Output = Vec<LabelledBoard>;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, FixtureError> {
        let mut puzzles = Vec::new();
        let mut pending: Option<PendingBlock> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if trimmed.starts_with("Grid") {
                if let Some(block) = pending.take() {
                    puzzles.push(block.finish()?);
                }
                pending = Some(PendingBlock {
                    label: trimmed.to_string(),
                    header_line: line_num,
                    rows: Vec::with_capacity(9),
                });
                continue;
            }

            match pending.as_mut() {
                Some(block) => block.rows.push(trimmed.to_string()),
                None => {
                    return Err(FixtureError::parse(
                        line_num,
                        FixtureParseErrorKind::UnexpectedLine {
                            content: trimmed.to_string(),
                        },
                    ));
                }
            }
        }

        if let Some(block) = pending.take() {
            puzzles.push(block.finish()?);
        }
        if puzzles.is_empty() {
            return Err(FixtureError::MissingRecord("Grid".to_string()));
        }
        Ok(puzzles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sudoku::BoardParseError;
    use std::io::Cursor;

    const TWO_GRIDS: &str = "\
Grid 01
003020600
900305001
001806400
008102900
700000008
006708200
002609500
800203009
005010300
Grid 02
200080300
060070084
030500209
000105408
000000000
402706000
301007040
720040060
004010003
";

    #[test]
    fn reads_labelled_blocks() {
        let puzzles = SudokuFile::read_from(&mut Cursor::new(TWO_GRIDS)).unwrap();
        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].label, "Grid 01");
        assert_eq!(puzzles[1].label, "Grid 02");
        assert_eq!(puzzles[1].board.get(0, 0), 2);
    }

    #[test]
    fn short_block_reports_header_line() {
        let truncated: String = TWO_GRIDS.lines().take(5).collect::<Vec<_>>().join("\n");
        let err = SudokuFile::read_from(&mut Cursor::new(truncated)).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Parse {
                line: 1,
                kind: FixtureParseErrorKind::Board(BoardParseError::WrongRowCount {
                    expected: 9,
                    found: 4
                })
            }
        ));
    }

    #[test]
    fn rows_before_any_header_are_rejected() {
        let err = SudokuFile::read_from(&mut Cursor::new("003020600\n")).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Parse {
                line: 1,
                kind: FixtureParseErrorKind::UnexpectedLine { .. }
            }
        ));
    }

    #[test]
    fn file_without_grids_is_missing_record() {
        let result = SudokuFile::read_from(&mut Cursor::new("\n"));
        assert!(matches!(result, Err(FixtureError::MissingRecord(_))));
    }
}
