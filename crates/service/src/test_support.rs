#![cfg(test)]
use std::sync::Arc;

use crate::books::{BookService, SeaOrmBookRepository};

/// Service over a private in-memory database, one per test.
pub async fn book_service() -> Result<BookService<SeaOrmBookRepository>, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    Ok(BookService::new(Arc::new(SeaOrmBookRepository { db })))
}
