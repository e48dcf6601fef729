use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Connect the store, create the table if needed, and build the shared state.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    common::env::ensure_db_dir(&cfg.database.url).await?;
    let db = models::db::connect(&cfg.database).await?;
    ServerState::new(db)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state);

    let addr = bind_addr(&cfg)?;
    info!(%addr, database = %cfg.database.url, debug = cfg.server.debug, "starting bookshelf server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 5000;
        assert_eq!(bind_addr(&cfg).unwrap(), "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
    }

    #[tokio::test]
    async fn build_state_creates_file_database() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("bookshelf-startup-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let mut cfg = AppConfig::default();
        cfg.database.url = configs::sqlite_file_url(&dir.join("books.db"));
        cfg.normalize_and_validate()?;

        let state = build_state(&cfg).await?;
        assert!(state.books.list().await?.is_empty());
        assert!(dir.join("books.db").exists());

        drop(state);
        let _ = std::fs::remove_dir_all(&dir);
        Ok(())
    }

    #[tokio::test]
    async fn restart_on_existing_file_keeps_rows() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("bookshelf-restart-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let mut cfg = AppConfig::default();
        cfg.database.url = configs::sqlite_file_url(&dir.join("books.db"));
        cfg.normalize_and_validate()?;

        let first = build_state(&cfg).await?;
        let created = first
            .books
            .create(service::books::BookForm {
                title: "Dune".into(),
                author: "Frank Herbert".into(),
                rating: "9".into(),
            })
            .await?;
        drop(first);

        let second = build_state(&cfg).await?;
        assert_eq!(second.books.list().await?, vec![created]);

        drop(second);
        let _ = std::fs::remove_dir_all(&dir);
        Ok(())
    }
}
