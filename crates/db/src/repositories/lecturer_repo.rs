//! Repository for the `data_dosen` table.

use sqlx::PgPool;

use crate::models::lecturer::{CreateLecturer, Lecturer, UpdateLecturer};

const COLUMNS: &str = "nip, nama_lengkap, prodi_id, created_at, updated_at";

/// Provides CRUD operations for lecturers, keyed by NIP.
pub struct LecturerRepo;

impl LecturerRepo {
    pub async fn create(pool: &PgPool, input: &CreateLecturer) -> Result<Lecturer, sqlx::Error> {
        let query = format!(
            "INSERT INTO data_dosen (nip, nama_lengkap, prodi_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(&input.nip)
            .bind(&input.nama_lengkap)
            .bind(input.prodi_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_nip(pool: &PgPool, nip: &str) -> Result<Option<Lecturer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM data_dosen WHERE nip = $1");
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(nip)
            .fetch_optional(pool)
            .await
    }

    /// List all lecturers, ordered by NIP.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lecturer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM data_dosen ORDER BY nip ASC");
        sqlx::query_as::<_, Lecturer>(&query).fetch_all(pool).await
    }

    /// Replace the lecturer currently stored under `nip`.
    ///
    /// `input.nip` may rename the key. Returns `None` if no such lecturer.
    pub async fn update(
        pool: &PgPool,
        nip: &str,
        input: &UpdateLecturer,
    ) -> Result<Option<Lecturer>, sqlx::Error> {
        let query = format!(
            "UPDATE data_dosen SET
                nip = $2,
                nama_lengkap = $3,
                prodi_id = $4,
                updated_at = NOW()
             WHERE nip = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(nip)
            .bind(&input.nip)
            .bind(&input.nama_lengkap)
            .bind(input.prodi_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lecturer. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while documents still reference
    /// the lecturer.
    pub async fn delete(pool: &PgPool, nip: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM data_dosen WHERE nip = $1")
            .bind(nip)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
