//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method runs exactly
//! one statement.

pub mod document_repo;
pub mod lecturer_repo;
pub mod study_program_repo;

pub use document_repo::DocumentRepo;
pub use lecturer_repo::LecturerRepo;
pub use study_program_repo::StudyProgramRepo;
