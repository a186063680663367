//! In-memory book shelf used by the `/books` demo endpoints.
//!
//! Books are addressed by their 1-based position on the shelf, not by the
//! `id` field they carry. Position `0` and positions past the end are
//! reported as [`CoreError::NotFound`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const ENTITY: &str = "Book";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
}

/// Ordered list of books. Not synchronized; callers wrap it in a lock.
#[derive(Debug, Default)]
pub struct Shelf {
    books: Vec<Book>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// All books in insertion order.
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn get(&self, position: usize) -> Result<&Book, CoreError> {
        let index = self.index_of(position)?;
        Ok(&self.books[index])
    }

    /// Replace the book at `position`, returning the previous one.
    pub fn replace(&mut self, position: usize, book: Book) -> Result<Book, CoreError> {
        let index = self.index_of(position)?;
        Ok(std::mem::replace(&mut self.books[index], book))
    }

    /// Remove the book at `position`; later books shift down by one.
    pub fn remove(&mut self, position: usize) -> Result<Book, CoreError> {
        let index = self.index_of(position)?;
        Ok(self.books.remove(index))
    }

    fn index_of(&self, position: usize) -> Result<usize, CoreError> {
        match position.checked_sub(1) {
            Some(index) if index < self.books.len() => Ok(index),
            _ => Err(CoreError::not_found(ENTITY, position)),
        }
    }
}
