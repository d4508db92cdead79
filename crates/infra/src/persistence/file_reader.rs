use std::{
    fs::File,
    io::{BufReader, ErrorKind},
    path::Path,
};

use user_stats_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for opening input files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`, reporting a missing file as
    /// [`InfrastructureError::CsvNotFound`].
    pub fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InfrastructureError::CsvNotFound { path: path.to_path_buf() },
            _ => InfrastructureError::FileRead { path: path.to_path_buf(), source },
        })
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }
}
