pub mod input;
pub mod repository;
pub mod service;

pub use input::{BookForm, NewBook, RatingForm};
pub use repository::{BookRepository, SeaOrmBookRepository};
pub use service::BookService;

pub use models::book::Model as Book;
