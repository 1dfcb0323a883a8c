//! Credential files: typed records read from the first row of a CSV file.
//!
//! Layout:
//! - `loader.rs`: generic first-row loader and the `CredentialRecord` trait
//! - `records.rs`: the key-pair and database record shapes

pub mod loader;
pub mod records;

pub use loader::{CredentialRecord, load_first_row};
pub use records::{AccessKeys, DbParams};

use crate::error::CredsError;
use std::path::Path;

/// Read the object-storage key pair from the credentials file at `path`.
pub fn get_access_keys(path: impl AsRef<Path>) -> Result<AccessKeys, CredsError> {
    load_first_row(path.as_ref())
}

/// Read the database connection parameters from the credentials file at `path`.
pub fn get_db_params(path: impl AsRef<Path>) -> Result<DbParams, CredsError> {
    load_first_row(path.as_ref())
}
