//! Environment/runtime helpers
//!
//! Sanity checks to ensure the database file can be created at startup.

use std::path::PathBuf;

use tracing::{debug, warn};

/// File path behind a `sqlite:` URL, or `None` for in-memory databases.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the directory holding the SQLite file exists.
pub async fn ensure_db_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else {
        debug!(%database_url, "in-memory database; nothing to prepare");
        return Ok(());
    };
    let dir = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => return Ok(()),
    };
    if tokio::fs::metadata(&dir).await.is_err() {
        warn!(dir = %dir.display(), "database directory missing; creating it");
    }
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    Ok(())
}
