//! Document (`data_dokumen`) model and DTOs.

use repositori_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `data_dokumen` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    /// Owning lecturer, references `data_dosen.nip`.
    pub nip: String,
    pub type_dokumen: String,
    pub nama_dokumen: String,
    pub nama_file: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocument {
    pub nip: String,
    pub type_dokumen: String,
    pub nama_dokumen: String,
    pub nama_file: String,
}

/// DTO for replacing a document. Every column is required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDocument {
    pub nip: String,
    pub type_dokumen: String,
    pub nama_dokumen: String,
    pub nama_file: String,
}
