//! Loading the users table from comma-separated text.
//!
//! The first row is the header; every following row becomes one
//! [`UserRecord`]. Only the `name`, `age` and `country` columns are read,
//! and none of them is validated here.

use std::{io::Read, path::Path};

use user_stats_domain::model::UserRecord;
use user_stats_shared_kernel::{InfraResult, InfrastructureError};

use super::FileReader;

/// Read every user row from the CSV file at `path`, in file order.
///
/// A header-only file yields an empty vector.
///
/// # Errors
/// [`InfrastructureError::CsvNotFound`] when the file does not exist,
/// [`InfrastructureError::FileRead`] when it cannot be opened, and
/// [`InfrastructureError::CsvParse`] for malformed rows, invalid UTF-8 or a
/// missing required column.
pub fn load_users(path: &Path) -> InfraResult<Vec<UserRecord>> {
    let file = FileReader::open_buffered(path)?;
    read_users(file).map_err(|source| InfrastructureError::CsvParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserialize user rows from any reader.
pub fn read_users<R: Read>(reader: R) -> Result<Vec<UserRecord>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    rdr.deserialize::<UserRecord>().collect()
}
