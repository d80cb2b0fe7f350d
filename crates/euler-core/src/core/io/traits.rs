use super::error::FixtureError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Common interface of the fixture readers.
///
/// Implementors parse from any buffered reader; reading from a path is provided.
pub trait FixtureFile {
    /// The parsed contents of the fixture.
    type Output;

    /// Parses a fixture from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is malformed.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, FixtureError>;

    /// Opens and parses the fixture at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Output, FixtureError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
