//! Object storage: S3 bucket handles built from a key-pair credentials file.

pub mod bucket;

pub use bucket::Bucket;

use crate::config::{CONFIG, S3Settings};
use crate::creds::get_access_keys;
use crate::error::CredsError;
use std::path::Path;

/// Resolve `bucket_name` with the keys in `path`, using the global S3 settings.
///
/// Settings come from [`CONFIG`], which falls back to defaults when the
/// environment holds invalid values. Use [`get_bucket_with`] with a
/// [`Config::load`](crate::config::Config::load) result to fail on those instead.
pub async fn get_bucket(path: impl AsRef<Path>, bucket_name: &str) -> Result<Bucket, CredsError> {
    get_bucket_with(path, bucket_name, &CONFIG.s3).await
}

/// Like [`get_bucket`] with explicit settings.
///
/// The key pair is read before any request is sent.
pub async fn get_bucket_with(
    path: impl AsRef<Path>,
    bucket_name: &str,
    settings: &S3Settings,
) -> Result<Bucket, CredsError> {
    let keys = get_access_keys(path)?;
    bucket::resolve(&keys, bucket_name, settings).await
}
