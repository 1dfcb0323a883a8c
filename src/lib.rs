pub mod config;
pub mod creds;
pub mod db;
pub mod error;
pub mod storage;

pub use creds::{AccessKeys, DbParams, get_access_keys, get_db_params};
pub use db::{Cursor, Engine, get_cursor, get_engine};
pub use error::CredsError;
pub use storage::{Bucket, get_bucket};
