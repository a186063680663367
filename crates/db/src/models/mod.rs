//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO carrying every column, for full replacement
//!
//! Field names follow the column names, which are also the JSON field names
//! clients send and receive.

pub mod document;
pub mod lecturer;
pub mod study_program;
