use std::sync::Arc;

use tracing::{info, instrument};

use crate::books::{Book, BookForm, BookRepository, NewBook, RatingForm};
use crate::errors::ServiceError;

/// Application service behind the catalog routes.
/// Input is validated here; the repository only ever sees typed values.
pub struct BookService<R: BookRepository> {
    repo: Arc<R>,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Book>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<Book, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("book", id))
    }

    #[instrument(skip(self, form), fields(title = %form.title))]
    pub async fn create(&self, form: BookForm) -> Result<Book, ServiceError> {
        let input = NewBook::try_from(form)?;
        let book = self.repo.create(&input).await?;
        info!(id = book.id, rating = book.rating, "book_created");
        Ok(book)
    }

    /// Unknown ids are reported as not-found before the form is looked at.
    #[instrument(skip(self, form))]
    pub async fn update_rating(&self, id: i32, form: &RatingForm) -> Result<Book, ServiceError> {
        self.get(id).await?;
        let rating = form.rating()?;
        let book = self
            .repo
            .update_rating(id, rating)
            .await?
            .ok_or_else(|| ServiceError::not_found("book", id))?;
        info!(id, rating, "book_rating_updated");
        Ok(book)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("book", id));
        }
        info!(id, "book_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::book_service;

    fn form(title: &str, author: &str, rating: &str) -> BookForm {
        BookForm { title: title.into(), author: author.into(), rating: rating.into() }
    }

    fn rating(value: &str) -> RatingForm {
        RatingForm { rating: Some(value.into()) }
    }

    #[tokio::test]
    async fn list_returns_ascending_ids() -> Result<(), anyhow::Error> {
        let svc = book_service().await?;
        assert!(svc.list().await?.is_empty());

        for (i, title) in ["Zebra", "Apple", "Mango", "Kiwi"].iter().enumerate() {
            svc.create(form(title, "anon", &i.to_string())).await?;
        }
        svc.delete(svc.list().await?[1].id).await?;
        svc.create(form("Late", "anon", "1")).await?;

        let ids: Vec<i32> = svc.list().await?.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 4);
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not ascending: {ids:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create_assigns_fresh_id() -> Result<(), anyhow::Error> {
        let svc = book_service().await?;
        let first = svc.create(form("T0", "A0", "1")).await?;
        let created = svc.create(form("T1", "A1", "4.5")).await?;
        assert_ne!(created.id, first.id);

        let stored: Vec<Book> = svc.list().await?.into_iter().filter(|b| b.title == "T1").collect();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, created.id);
        assert_eq!(stored[0].author, "A1");
        assert_eq!(stored[0].rating, 4.5);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_title_conflicts_and_leaves_store_unchanged() -> Result<(), anyhow::Error> {
        let svc = book_service().await?;
        svc.create(form("T1", "A1", "4.5")).await?;
        let before = svc.list().await?;

        let err = svc.create(form("T1", "Other", "2")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
        assert_eq!(svc.list().await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn bad_rating_is_rejected_before_insert() -> Result<(), anyhow::Error> {
        let svc = book_service().await?;
        let err = svc.create(form("T1", "A1", "excellent")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn edit_updates_only_rating() -> Result<(), anyhow::Error> {
        let svc = book_service().await?;
        let b = svc.create(form("T1", "A1", "4.5")).await?;
        let updated = svc.update_rating(b.id, &rating("5.0")).await?;
        assert_eq!(updated, Book { id: b.id, title: "T1".into(), author: "A1".into(), rating: 5.0 });
        assert_eq!(svc.get(b.id).await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn edit_with_bad_rating_keeps_old_value() -> Result<(), anyhow::Error> {
        let svc = book_service().await?;
        let b = svc.create(form("T1", "A1", "4.5")).await?;
        let err = svc.update_rating(b.id, &rating("five")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(svc.get(b.id).await?.rating, 4.5);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_wins_over_bad_or_missing_rating() -> Result<(), anyhow::Error> {
        let svc = book_service().await?;
        let err = svc.update_rating(42, &rating("five")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");
        let err = svc.update_rating(42, &RatingForm::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() -> Result<(), anyhow::Error> {
        let svc = book_service().await?;
        let keep = svc.create(form("Keep", "A", "1")).await?;
        let gone = svc.create(form("Gone", "B", "2")).await?;

        svc.delete(gone.id).await?;
        assert_eq!(svc.list().await?, vec![keep]);
        assert!(matches!(svc.get(gone.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn stale_id_is_not_found_without_mutation() -> Result<(), anyhow::Error> {
        let svc = book_service().await?;
        let other = svc.create(form("Other", "A", "3")).await?;
        let stale = svc.create(form("Stale", "B", "2")).await?;
        svc.delete(stale.id).await?;

        let err = svc.update_rating(stale.id, &rating("9")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let err = svc.delete(stale.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(svc.list().await?, vec![other]);
        Ok(())
    }
}
