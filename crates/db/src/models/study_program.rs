//! Study program (`data_prodi`) model and DTOs.

use repositori_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `data_prodi` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudyProgram {
    pub id: DbId,
    /// Short program code, unique across programs.
    pub kode_prodi: String,
    pub nama_prodi: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a study program.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudyProgram {
    pub kode_prodi: String,
    pub nama_prodi: String,
}

/// DTO for replacing a study program. Every column is required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudyProgram {
    pub kode_prodi: String,
    pub nama_prodi: String,
}
