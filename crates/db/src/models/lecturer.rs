//! Lecturer (`data_dosen`) model and DTOs.
//!
//! Lecturers are keyed by their NIP (employee number) rather than a
//! surrogate id.

use repositori_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `data_dosen` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lecturer {
    pub nip: String,
    pub nama_lengkap: String,
    /// References `data_prodi.id`.
    pub prodi_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLecturer {
    pub nip: String,
    pub nama_lengkap: String,
    pub prodi_id: DbId,
}

/// DTO for replacing a lecturer. A new `nip` renames the key; documents
/// follow via `ON UPDATE CASCADE`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLecturer {
    pub nip: String,
    pub nama_lengkap: String,
    pub prodi_id: DbId,
}
