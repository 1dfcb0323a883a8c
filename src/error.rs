use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::head_bucket::HeadBucketError;
use sqlx::Error as SqlxError;
use std::path::PathBuf;
use thiserror::Error as ThisError;

pub type S3Error = SdkError<HeadBucketError>;

#[derive(Debug, ThisError)]
pub enum CredsError {
    #[error("cannot read credentials file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credentials file {} is missing column(s): {}", .path.display(), .columns.join(", "))]
    FieldNotFound {
        path: PathBuf,
        columns: Vec<&'static str>,
    },

    #[error("credentials file {} has no data row", .path.display())]
    NoDataRow { path: PathBuf },

    #[error("malformed credentials file {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid database port: {value:?}")]
    InvalidPort { value: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("cannot build engine URL: {0}")]
    EngineUrl(&'static str),

    #[error("bucket `{bucket}` not found")]
    BucketNotFound { bucket: String },

    #[error("access to bucket `{bucket}` rejected: {source}")]
    Authentication {
        bucket: String,
        #[source]
        source: Box<S3Error>,
    },

    #[error("S3 request for bucket `{bucket}` failed: {source}")]
    S3 {
        bucket: String,
        #[source]
        source: Box<S3Error>,
    },

    #[error("database engine needs a running Tokio runtime")]
    NoRuntime,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

impl CredsError {
    /// True when the failure happened before any client was contacted.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            CredsError::FileAccess { .. }
                | CredsError::FieldNotFound { .. }
                | CredsError::NoDataRow { .. }
                | CredsError::Csv { .. }
                | CredsError::InvalidPort { .. }
                | CredsError::UrlParse(_)
                | CredsError::EngineUrl(_)
                | CredsError::NoRuntime
        )
    }
}
