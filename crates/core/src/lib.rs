//! Domain types shared by the database and HTTP layers.

pub mod books;
pub mod error;
pub mod types;
