//! Persistence layer: the `books` entity and the SQLite connection it lives in.

pub mod book;
pub mod db;
