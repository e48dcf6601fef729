use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::sea_query::{ColumnDef, Table};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityName};
use tracing::info;

use crate::book;

/// Opens a pool from `cfg` and makes sure the `books` table exists.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(cfg).await?;
    ensure_schema(&db).await?;
    info!(max_connections = cfg.max_connections, "database ready");
    Ok(db)
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    Database::connect(opt).await
}

/// Lifetime of the single in-memory connection. sqlx would otherwise recycle
/// it after its default timeouts, taking the database with it.
const MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Pool settings for `sqlite::memory:`: one connection, kept for a day.
///
/// Every SQLite connection to `:memory:` sees its own database, so the pool
/// must never open a second one or replace the first.
pub fn in_memory_options() -> ConnectOptions {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
    opt.max_connections(1)
        .min_connections(1)
        .idle_timeout(MEMORY_CONN_LIFETIME)
        .max_lifetime(MEMORY_CONN_LIFETIME)
        .sqlx_logging(false);
    opt
}

/// Private in-memory database with the schema applied.
pub async fn connect_in_memory() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(in_memory_options()).await?;
    ensure_schema(&db).await?;
    Ok(db)
}

/// `CREATE TABLE IF NOT EXISTS books`; a no-op when the table is already there.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let stmt = Table::create()
        .table(book::Entity.table_ref())
        .if_not_exists()
        .col(
            ColumnDef::new(book::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(book::Column::Title).string_len(250).not_null().unique_key())
        .col(ColumnDef::new(book::Column::Author).string_len(250).not_null())
        .col(ColumnDef::new(book::Column::Rating).double().not_null())
        .to_owned();
    let backend = db.get_database_backend();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}
