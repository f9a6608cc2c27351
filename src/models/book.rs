//! Book record
//!
//! The only domain type of the service. It doubles as the POST request body,
//! so its serde shape is the schema every incoming payload is checked against.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// `id` is supplied by the caller and is not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Creates a new Book
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}
