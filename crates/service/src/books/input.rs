//! Raw form payloads and their validated counterparts.
//!
//! Forms arrive as untyped text. Each is converted into a typed request
//! before any store write, so a bad rating never reaches the database.

use serde::Deserialize;

use crate::errors::ServiceError;

/// Fields posted by the add form.
#[derive(Debug, Clone, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub rating: String,
}

/// Field posted by the edit form. Older forms name it `number`.
///
/// The field is optional at the extractor level so that the target book is
/// looked up before the rating is examined.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingForm {
    #[serde(default, alias = "number")]
    pub rating: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub rating: f64,
}

impl TryFrom<BookForm> for NewBook {
    type Error = ServiceError;

    fn try_from(form: BookForm) -> Result<Self, Self::Error> {
        let rating = parse_rating(&form.rating)?;
        Ok(NewBook { title: form.title, author: form.author, rating })
    }
}

impl RatingForm {
    pub fn rating(&self) -> Result<f64, ServiceError> {
        match self.rating.as_deref() {
            Some(raw) => parse_rating(raw),
            None => Err(ServiceError::Validation("rating is required".into())),
        }
    }
}

/// Coerces rating text to a finite `f64`.
pub fn parse_rating(raw: &str) -> Result<f64, ServiceError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ServiceError::Validation(format!("rating {:?} is not a number", raw)))?;
    // SQLite stores NaN as NULL, which the NOT NULL column rejects.
    if !value.is_finite() {
        return Err(ServiceError::Validation(format!("rating {:?} is not finite", raw)));
    }
    Ok(value)
}
