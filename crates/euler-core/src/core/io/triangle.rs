use super::error::{FixtureError, FixtureParseErrorKind};
use super::traits::FixtureFile;
use std::io::BufRead;

/// Number triangle: whitespace-separated values, row `i` holding `i + 1` of them.
/// Blank lines are skipped.
pub struct TriangleFile;

impl FixtureFile for TriangleFile {
    type Output = Vec<Vec<u64>>;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, FixtureError> {
        let mut rows: Vec<Vec<u64>> = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            if line.trim().is_empty() {
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<u64>()
                        .map_err(|_| FixtureError::invalid_int(line_num, token))
                })
                .collect::<Result<Vec<u64>, _>>()?;

            let expected = rows.len() + 1;
            if row.len() != expected {
                return Err(FixtureError::parse(
                    line_num,
                    FixtureParseErrorKind::WrongLength {
                        expected,
                        found: row.len(),
                    },
                ));
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(FixtureError::MissingRecord("triangle rows".to_string()));
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(content: &str) -> Result<Vec<Vec<u64>>, FixtureError> {
        TriangleFile::read_from(&mut Cursor::new(content))
    }

    #[test]
    fn reads_rows_with_leading_zeros_and_blank_lines() {
        let rows = read("3\n\n7 4\n2 04 6\n").unwrap();
        assert_eq!(rows, vec![vec![3], vec![7, 4], vec![2, 4, 6]]);
    }

    #[test]
    fn rejects_row_with_wrong_width() {
        let err = read("3\n7 4 1\n").unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Parse {
                line: 2,
                kind: FixtureParseErrorKind::WrongLength {
                    expected: 2,
                    found: 3
                }
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        let err = read("3\n7 x\n").unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Parse {
                line: 2,
                kind: FixtureParseErrorKind::InvalidInt { .. }
            }
        ));
    }

    #[test]
    fn empty_input_is_missing_record() {
        assert!(matches!(read("\n\n"), Err(FixtureError::MissingRecord(_))));
    }

    #[test]
    fn reads_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.txt");
        std::fs::write(&path, "1\n2 3\n").unwrap();
        let rows = TriangleFile::read_from_path(&path).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TriangleFile::read_from_path(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
