use crate::error::CredsError;
use serde::de::DeserializeOwned;
use std::{fs, path::Path};
use tracing::debug;

/// A typed view of one row of a credentials file.
pub trait CredentialRecord: DeserializeOwned {
    /// Header names that must be present, matched exactly.
    const COLUMNS: &'static [&'static str];
}

/// Read the CSV file at `path` and deserialize its first data row into `R`.
///
/// Later rows and unknown columns are ignored. Values are returned verbatim.
pub fn load_first_row<R: CredentialRecord>(path: &Path) -> Result<R, CredsError> {
    let contents = fs::read(path).map_err(|source| CredsError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::None)
        .from_reader(contents.as_slice());

    let malformed = |source: csv::Error| CredsError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(malformed)?.clone();
    let missing: Vec<&'static str> = R::COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(CredsError::FieldNotFound {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    let record = reader
        .deserialize::<R>()
        .next()
        .ok_or_else(|| CredsError::NoDataRow {
            path: path.to_path_buf(),
        })?
        .map_err(malformed)?;

    debug!(path = %path.display(), columns = ?R::COLUMNS, "loaded credentials");
    Ok(record)
}
