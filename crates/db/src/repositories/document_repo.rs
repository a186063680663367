//! Repository for the `data_dokumen` table.

use repositori_core::types::DbId;
use sqlx::PgPool;

use crate::models::document::{CreateDocument, Document, UpdateDocument};

const COLUMNS: &str =
    "id, nip, type_dokumen, nama_dokumen, nama_file, created_at, updated_at";

/// Provides CRUD operations for lecturer documents.
pub struct DocumentRepo;

impl DocumentRepo {
    pub async fn create(pool: &PgPool, input: &CreateDocument) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO data_dokumen (nip, type_dokumen, nama_dokumen, nama_file)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(&input.nip)
            .bind(&input.type_dokumen)
            .bind(&input.nama_dokumen)
            .bind(&input.nama_file)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM data_dokumen WHERE id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all documents, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM data_dokumen ORDER BY id ASC");
        sqlx::query_as::<_, Document>(&query).fetch_all(pool).await
    }

    /// Replace every column of a document.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDocument,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE data_dokumen SET
                nip = $2,
                type_dokumen = $3,
                nama_dokumen = $4,
                nama_file = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(&input.nip)
            .bind(&input.type_dokumen)
            .bind(&input.nama_dokumen)
            .bind(&input.nama_file)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM data_dokumen WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
