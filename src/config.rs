use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Environment prefix for every setting, e.g. `FETCH_CREDS_S3__REGION`.
pub const ENV_PREFIX: &str = "FETCH_CREDS_";

/// Global settings, built on first use.
///
/// Invalid `FETCH_CREDS_*` values are logged and replaced by defaults. Callers
/// that must fail on bad settings should call [`Config::load`] themselves and
/// use the `*_with` resolvers.
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration; falling back to defaults");
        Config::default()
    })
});

/// Non-secret settings. Secrets live in the credentials files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub loglevel: String,
    pub aws_creds: Option<PathBuf>,
    pub db_creds: Option<PathBuf>,
    pub bucket: Option<String>,
    pub s3: S3Settings,
    pub db: DbSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loglevel: "info".to_string(),
            aws_creds: None,
            db_creds: None,
            bucket: None,
            s3: S3Settings::default(),
            db: DbSettings::default(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `FETCH_CREDS_*` environment variables.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Settings {
    /// Signing region.
    pub region: String,
    /// Custom S3-compatible endpoint; AWS endpoints are used when unset.
    pub endpoint: Option<Url>,
}

impl Default for S3Settings {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            endpoint: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbSettings {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DbSettings {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .extract()
            .expect("defaults should extract");
        assert_eq!(cfg.loglevel, "info");
        assert_eq!(cfg.s3.region, "us-east-1");
        assert!(cfg.s3.endpoint.is_none());
        assert_eq!(cfg.db.max_connections, 5);
        assert_eq!(cfg.db.acquire_timeout(), Duration::from_secs(30));
        assert!(cfg.aws_creds.is_none() && cfg.db_creds.is_none() && cfg.bucket.is_none());
    }

    #[test]
    fn nested_overrides_are_merged() {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Serialized::default("s3.region", "eu-west-1"))
            .merge(Serialized::default("s3.endpoint", "http://localhost:9000"))
            .merge(Serialized::default("db.max_connections", 12))
            .merge(Serialized::default("bucket", "reports"))
            .extract()
            .expect("overrides should extract");
        assert_eq!(cfg.s3.region, "eu-west-1");
        assert_eq!(
            cfg.s3.endpoint.as_ref().map(Url::as_str),
            Some("http://localhost:9000/")
        );
        assert_eq!(cfg.db.max_connections, 12);
        assert_eq!(cfg.db.acquire_timeout_secs, 30);
        assert_eq!(cfg.bucket.as_deref(), Some("reports"));
    }

    #[test]
    fn invalid_values_fail_extraction() {
        let result = Config::figment()
            .merge(Serialized::default("db.max_connections", "many"))
            .extract::<Config>();
        assert!(result.is_err());

        let result = Config::figment()
            .merge(Serialized::default("s3.endpoint", "not a url"))
            .extract::<Config>();
        assert!(result.is_err());
    }
}
