use fetch_creds::config::Config;
use fetch_creds::{CredsError, creds, db, storage};
use mimalloc::MiMalloc;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        aws_creds = %cfg.aws_creds.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<none>".into()),
        db_creds = %cfg.db_creds.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<none>".into()),
        bucket = %cfg.bucket.as_deref().unwrap_or("<none>"),
        region = %cfg.s3.region,
        loglevel = %cfg.loglevel,
    );

    let mut failures = 0usize;

    match cfg.aws_creds.as_ref() {
        Some(path) => {
            if let Err(e) = probe_storage(path, &cfg).await {
                error!(path = %path.display(), error = %e, "object storage probe failed");
                failures += 1;
            }
        }
        None => info!("no key-pair credentials configured; skipping object storage"),
    }

    match cfg.db_creds.as_ref() {
        Some(path) => {
            if let Err(e) = probe_database(path, &cfg).await {
                error!(path = %path.display(), error = %e, "database probe failed");
                failures += 1;
            }
        }
        None => info!("no database credentials configured; skipping database"),
    }

    if failures > 0 {
        return Err(format!("{failures} probe(s) failed").into());
    }
    Ok(())
}

async fn probe_storage(path: &Path, cfg: &Config) -> Result<(), CredsError> {
    let keys = creds::get_access_keys(path)?;
    info!(access_key_id = %keys.access_key_id, "key pair loaded");

    let Some(bucket_name) = cfg.bucket.as_deref() else {
        warn!("no bucket configured; key pair loaded but not checked against S3");
        return Ok(());
    };
    let bucket = storage::get_bucket_with(path, bucket_name, &cfg.s3).await?;
    info!(bucket = bucket.name(), "bucket reachable");
    Ok(())
}

async fn probe_database(path: &Path, cfg: &Config) -> Result<(), CredsError> {
    let params = creds::get_db_params(path)?;
    info!(
        user = %params.user,
        host = %params.host,
        port = %params.port,
        sid = %params.sid,
        "database parameters loaded"
    );

    let mut cursor = db::get_cursor(path).await?;
    cursor.fetch_optional("SELECT 1").await?;
    cursor.close().await?;
    info!("cursor round-trip succeeded");

    let engine = db::get_engine_with(path, &cfg.db)?;
    let conn = engine.pool().acquire().await?;
    drop(conn);
    engine.pool().close().await;
    info!(url = %engine.redacted_url(), "engine round-trip succeeded");
    Ok(())
}
