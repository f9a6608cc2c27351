//! In-Memory Book Store
//!
//! Process-lifetime storage backed by a `Vec` behind a read/write lock.

use parking_lot::RwLock;

use crate::models::Book;
use crate::store::BookStore;

// == In-Memory Book Store ==
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given books, in order.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    /// Creates the store the service starts with: two catalog entries.
    pub fn seeded() -> Self {
        Self::with_books(vec![
            Book::new(1, "O Senhor dos Anéis", "J.R.R. Tolkien"),
            Book::new(2, "1984", "George Orwell"),
        ])
    }

    // == Length ==
    /// Returns the number of stored books.
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.books.read().is_empty()
    }
}

impl BookStore for InMemoryBookStore {
    fn append(&self, book: Book) {
        self.books.write().push(book);
    }

    fn list_all(&self) -> Vec<Book> {
        self.books.read().clone()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_new() {
        let store = InMemoryBookStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_store_seeded() {
        let store = InMemoryBookStore::seeded();
        let books = store.list_all();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[1].title, "1984");
    }

    #[test]
    fn test_append_preserves_order() {
        let store = InMemoryBookStore::new();
        store.append(Book::new(10, "A", "x"));
        store.append(Book::new(5, "B", "y"));
        store.append(Book::new(7, "C", "z"));

        let ids: Vec<i64> = store.list_all().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![10, 5, 7]);
    }

    #[test]
    fn test_append_accepts_duplicate_ids() {
        let store = InMemoryBookStore::seeded();
        store.append(Book::new(1, "Another", "Someone"));

        assert_eq!(store.len(), 3);
        assert_eq!(store.list_all().iter().filter(|b| b.id == 1).count(), 2);
    }
}
