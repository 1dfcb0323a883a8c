use crate::config::S3Settings;
use crate::creds::AccessKeys;
use crate::error::{CredsError, S3Error};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Builder as S3ConfigBuilder, Credentials, Region};
use secrecy::ExposeSecret;
use tracing::info;

/// Handle to one S3 bucket, bound to the credentials it was resolved with.
#[derive(Debug, Clone)]
pub struct Bucket {
    client: Client,
    name: String,
}

impl Bucket {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn into_client(self) -> Client {
        self.client
    }
}

/// Build an S3 client with static credentials and path-style addressing.
pub fn build_client(keys: &AccessKeys, settings: &S3Settings) -> Client {
    let credentials = Credentials::new(
        &keys.access_key_id,
        keys.secret_access_key.expose_secret(),
        None,
        None,
        "fetch-creds",
    );

    let mut builder = S3ConfigBuilder::new()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(settings.region.clone()))
        .credentials_provider(credentials)
        .force_path_style(true);
    if let Some(endpoint) = &settings.endpoint {
        builder = builder.endpoint_url(endpoint.as_str());
    }

    Client::from_conf(builder.build())
}

/// Confirm the bucket is reachable with these keys and return its handle.
pub async fn resolve(
    keys: &AccessKeys,
    bucket_name: &str,
    settings: &S3Settings,
) -> Result<Bucket, CredsError> {
    let client = build_client(keys, settings);
    client
        .head_bucket()
        .bucket(bucket_name)
        .send()
        .await
        .map_err(|e| classify(bucket_name, e))?;

    info!(bucket = bucket_name, region = %settings.region, "bucket resolved");
    Ok(Bucket {
        client,
        name: bucket_name.to_string(),
    })
}

fn classify(bucket: &str, err: S3Error) -> CredsError {
    if err.as_service_error().is_some_and(|e| e.is_not_found()) {
        return CredsError::BucketNotFound {
            bucket: bucket.to_string(),
        };
    }
    match err.raw_response().map(|r| r.status().as_u16()) {
        Some(404) => CredsError::BucketNotFound {
            bucket: bucket.to_string(),
        },
        Some(401 | 403) => CredsError::Authentication {
            bucket: bucket.to_string(),
            source: Box::new(err),
        },
        _ => CredsError::S3 {
            bucket: bucket.to_string(),
            source: Box::new(err),
        },
    }
}
