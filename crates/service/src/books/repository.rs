use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::books::{Book, NewBook};
use crate::errors::ServiceError;

#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Book>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Book>, ServiceError>;
    async fn create(&self, input: &NewBook) -> Result<Book, ServiceError>;
    /// `None` when no book has `id`; nothing is written in that case.
    async fn update_rating(&self, id: i32, rating: f64) -> Result<Option<Book>, ServiceError>;
    /// `false` when no book has `id`.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository. Each write runs in its own transaction, which
/// rolls back when dropped without a commit.
pub struct SeaOrmBookRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn list(&self) -> Result<Vec<Book>, ServiceError> {
        Ok(models::book::list(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, ServiceError> {
        Ok(models::book::find(&self.db, id).await?)
    }

    async fn create(&self, input: &NewBook) -> Result<Book, ServiceError> {
        let txn = self.db.begin().await?;
        let created = models::book::create(&txn, &input.title, &input.author, input.rating).await?;
        txn.commit().await?;
        Ok(created)
    }

    async fn update_rating(&self, id: i32, rating: f64) -> Result<Option<Book>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(found) = models::book::find(&txn, id).await? else {
            return Ok(None);
        };
        let updated = models::book::set_rating(&txn, found, rating).await?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(found) = models::book::find(&txn, id).await? else {
            return Ok(false);
        };
        models::book::delete(&txn, found).await?;
        txn.commit().await?;
        Ok(true)
    }
}
