//! Store Module
//!
//! The source of record for the book catalog.

mod memory;

pub use memory::InMemoryBookStore;

use crate::models::Book;

// == Book Store ==
/// Ordered, append-only collection of books.
///
/// Both operations are synchronous and infallible: a store access never
/// yields to other request tasks, so an `append` is atomic with respect to
/// concurrent reads.
pub trait BookStore: Send + Sync {
    /// Appends a book at the end of the collection. Ids are not checked.
    fn append(&self, book: Book);

    /// Returns every book in insertion order.
    fn list_all(&self) -> Vec<Book>;
}
