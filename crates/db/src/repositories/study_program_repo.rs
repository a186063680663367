//! Repository for the `data_prodi` table.

use repositori_core::types::DbId;
use sqlx::PgPool;

use crate::models::study_program::{CreateStudyProgram, StudyProgram, UpdateStudyProgram};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, kode_prodi, nama_prodi, created_at, updated_at";

/// Provides CRUD operations for study programs.
pub struct StudyProgramRepo;

impl StudyProgramRepo {
    /// Insert a new study program, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStudyProgram,
    ) -> Result<StudyProgram, sqlx::Error> {
        let query = format!(
            "INSERT INTO data_prodi (kode_prodi, nama_prodi)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyProgram>(&query)
            .bind(&input.kode_prodi)
            .bind(&input.nama_prodi)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StudyProgram>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM data_prodi WHERE id = $1");
        sqlx::query_as::<_, StudyProgram>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all study programs, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<StudyProgram>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM data_prodi ORDER BY id ASC");
        sqlx::query_as::<_, StudyProgram>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every column of a study program.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudyProgram,
    ) -> Result<Option<StudyProgram>, sqlx::Error> {
        let query = format!(
            "UPDATE data_prodi SET
                kode_prodi = $2,
                nama_prodi = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyProgram>(&query)
            .bind(id)
            .bind(&input.kode_prodi)
            .bind(&input.nama_prodi)
            .fetch_optional(pool)
            .await
    }

    /// Delete a study program by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM data_prodi WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
