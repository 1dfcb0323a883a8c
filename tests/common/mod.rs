#![allow(dead_code)]

use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A credentials file under the temp dir, removed on drop.
pub struct TempCreds {
    pub path: PathBuf,
}

impl TempCreds {
    pub fn new(contents: &str) -> Self {
        Self::from_bytes(contents.as_bytes())
    }

    pub fn from_bytes(contents: &[u8]) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!(
            "fetch-creds-{}-{}-{}.csv",
            std::process::id(),
            nanos,
            seq
        ));
        fs::write(&path, contents).expect("failed to write credentials file");
        Self { path }
    }
}

impl Drop for TempCreds {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// A path that does not exist.
pub fn missing_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("fetch-creds-missing-{}.csv", std::process::id()));
    path
}

pub const DB_CSV: &str = "DB_USER,DB_PASSWD,DB_HOST,DB_PORT,DB_SID\nscott,tiger,127.0.0.1,1,ORCL\n";
