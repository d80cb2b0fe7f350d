use super::error::{FixtureError, FixtureParseErrorKind};
use super::traits::FixtureFile;
use crate::core::graph::Grid;
use std::io::BufRead;

/// Comma-separated matrix of non-negative integers, one row per line.
pub struct MatrixFile;

pub(crate) fn csv_reader<R: std::io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

pub(crate) fn record_line(record: &csv::StringRecord) -> usize {
    record.position().map(|p| p.line() as usize).unwrap_or(0)
}

pub(crate) fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

impl FixtureFile for MatrixFile {
    type Output = Grid<u64>;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, FixtureError> {
        let mut rows: Vec<Vec<u64>> = Vec::new();

        for result in csv_reader(reader).records() {
            let record = result.map_err(FixtureError::from_csv)?;
            if is_blank(&record) {
                continue;
            }
            let line = record_line(&record);

            let row = record
                .iter()
                .map(|field| {
                    field
                        .parse::<u64>()
                        .map_err(|_| FixtureError::invalid_int(line, field))
                })
                .collect::<Result<Vec<u64>, _>>()?;

            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(FixtureError::parse(
                        line,
                        FixtureParseErrorKind::WrongLength {
                            expected: first.len(),
                            found: row.len(),
                        },
                    ));
                }
            }
            rows.push(row);
        }

        Grid::from_rows(rows).map_err(|_| FixtureError::MissingRecord("matrix rows".to_string()))
    }
}
