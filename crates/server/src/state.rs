use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::books::{BookService, SeaOrmBookRepository};

use crate::views::Views;

pub type Catalog = BookService<SeaOrmBookRepository>;

/// Shared handler state; the store handle is built once at startup and injected here.
#[derive(Clone)]
pub struct ServerState {
    pub books: Arc<Catalog>,
    pub views: Arc<Views>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> anyhow::Result<Self> {
        let repo = Arc::new(SeaOrmBookRepository { db });
        Ok(Self {
            books: Arc::new(BookService::new(repo)),
            views: Arc::new(Views::new()?),
        })
    }
}
