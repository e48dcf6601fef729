//! Service layer for the book catalog.
//! - Validates raw form input into typed requests before touching the store.
//! - Runs every mutation inside its own transaction.
//! - Maps store failures onto a small error taxonomy.

pub mod errors;
pub mod books;
#[cfg(test)]
pub mod test_support;
