use super::error::{FixtureError, FixtureParseErrorKind};
use super::matrix::{csv_reader, is_blank, record_line};
use super::traits::FixtureFile;
use crate::core::geometry::Triangle;
use std::io::BufRead;

/// One triangle per line: `x1,y1,x2,y2,x3,y3`.
pub struct TriangleCoordsFile;

impl FixtureFile for TriangleCoordsFile {
    type Output = Vec<Triangle>;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, FixtureError> {
        let mut triangles = Vec::new();

        for result in csv_reader(reader).records() {
            let record = result.map_err(FixtureError::from_csv)?;
            if is_blank(&record) {
                continue;
            }
            let line = record_line(&record);

            if record.len() != 6 {
                return Err(FixtureError::parse(
                    line,
                    FixtureParseErrorKind::WrongLength {
                        expected: 6,
                        found: record.len(),
                    },
                ));
            }

            let mut coords = [0i64; 6];
            for (slot, field) in coords.iter_mut().zip(record.iter()) {
                *slot = field
                    .parse()
                    .map_err(|_| FixtureError::invalid_int(line, field))?;
            }
            triangles.push(Triangle::from_coords(coords));
        }

        if triangles.is_empty() {
            return Err(FixtureError::MissingRecord("triangle coordinates".to_string()));
        }
        Ok(triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXAMPLE: &str = "-340,495,-153,-910,835,-947\n-175,41,-421,-714,574,-645\n";

    #[test]
    fn reads_worked_example_triangles() {
        let triangles = TriangleCoordsFile::read_from(&mut Cursor::new(EXAMPLE)).unwrap();
        assert_eq!(triangles.len(), 2);
        assert!(triangles[0].contains_origin());
        assert!(!triangles[1].contains_origin());
    }

    #[test]
    fn rejects_short_records() {
        let err = TriangleCoordsFile::read_from(&mut Cursor::new("1,2,3,4,5\n")).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Parse {
                line: 1,
                kind: FixtureParseErrorKind::WrongLength {
                    expected: 6,
                    found: 5
                }
            }
        ));
    }

    #[test]
    fn rejects_non_integer_coordinates() {
        let err = TriangleCoordsFile::read_from(&mut Cursor::new("1,2,3,4,5,6.5\n")).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Parse {
                kind: FixtureParseErrorKind::InvalidInt { .. },
                ..
            }
        ));
    }
}
