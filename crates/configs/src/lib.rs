use std::path::{Path, PathBuf};

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

/// File name of the SQLite database created next to the executable.
pub const DEFAULT_DB_FILE: &str = "new-book-collection.db";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    /// Raises the default log level to `debug`.
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: Some(4),
            debug: false,
            log_json: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 5000 }
fn default_max_connections() -> u32 { 5 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Loads `$CONFIG_PATH` (or `config.toml`). A missing file yields defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

/// SQLite URL for `DEFAULT_DB_FILE` in the directory of the running executable.
pub fn default_database_url() -> String {
    let dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    sqlite_file_url(&dir.join(DEFAULT_DB_FILE))
}

/// `mode=rwc` lets the driver create the file when it does not exist yet.
pub fn sqlite_file_url(path: &Path) -> String {
    format!("sqlite://{}?mode=rwc", path.display())
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.apply_env_overrides();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Falls back to the executable-relative database file when no URL is set.
    pub fn normalize(&mut self) {
        if self.url.trim().is_empty() {
            self.url = default_database_url();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.url.to_lowercase().starts_with("sqlite:") {
            return Err(anyhow!("database.url must start with sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}
