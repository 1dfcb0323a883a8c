//! Database handles built from a database credentials file.
//!
//! Layout:
//! - `cursor.rs`: a single owned connection opened from discrete parameters
//! - `engine.rs`: a lazily connecting pool opened from a connection URL

pub mod cursor;
pub mod engine;

pub use cursor::Cursor;
pub use engine::{Engine, engine_url};

use crate::config::{CONFIG, DbSettings};
use crate::creds::get_db_params;
use crate::error::CredsError;
use std::path::Path;

/// Open a connection with the parameters in `path` and return a cursor over it.
pub async fn get_cursor(path: impl AsRef<Path>) -> Result<Cursor, CredsError> {
    let params = get_db_params(path)?;
    cursor::open(&params).await
}

/// Build a pooled engine from the parameters in `path`, using the global pool settings.
///
/// Settings come from [`CONFIG`], which falls back to defaults when the
/// environment holds invalid values. Use [`get_engine_with`] with a
/// [`Config::load`](crate::config::Config::load) result to fail on those instead.
/// Fails with [`CredsError::NoRuntime`] outside a Tokio runtime.
pub fn get_engine(path: impl AsRef<Path>) -> Result<Engine, CredsError> {
    get_engine_with(path, &CONFIG.db)
}

pub fn get_engine_with(path: impl AsRef<Path>, settings: &DbSettings) -> Result<Engine, CredsError> {
    let params = get_db_params(path)?;
    engine::create(&params, settings)
}
