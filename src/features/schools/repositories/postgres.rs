use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::schools::models::{NewSchool, School};
use crate::features::schools::repositories::{RepositoryError, SchoolRepository};

/// PostgreSQL-backed school storage
pub struct PgSchoolRepository {
    pool: PgPool,
}

impl PgSchoolRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a driver error, turning the `schools.name` unique violation into `DuplicateName`.
fn map_write_error(err: sqlx::Error, name: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return RepositoryError::DuplicateName(name.to_string());
        }
    }
    unavailable(err)
}

fn unavailable(err: sqlx::Error) -> RepositoryError {
    tracing::error!("School query failed: {:?}", err);
    RepositoryError::Unavailable(err.to_string())
}

#[async_trait]
impl SchoolRepository for PgSchoolRepository {
    async fn create(&self, school: &NewSchool) -> Result<School, RepositoryError> {
        sqlx::query_as::<_, School>(
            r#"
            INSERT INTO schools (name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, address, latitude, longitude, created_at, updated_at
            "#,
        )
        .bind(&school.name)
        .bind(&school.address)
        .bind(school.latitude)
        .bind(school.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &school.name))
    }

    async fn name_exists(&self, name: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM schools WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(unavailable)
    }

    async fn list(&self) -> Result<Vec<School>, RepositoryError> {
        sqlx::query_as::<_, School>(
            r#"
            SELECT id, name, address, latitude, longitude, created_at, updated_at
            FROM schools
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)
    }

    async fn get_by_id(&self, id: i64) -> Result<School, RepositoryError> {
        sqlx::query_as::<_, School>(
            r#"
            SELECT id, name, address, latitude, longitude, created_at, updated_at
            FROM schools
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)?
        .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i64, school: &NewSchool) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE schools
            SET name = $2, address = $3, latitude = $4, longitude = $5, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&school.name)
        .bind(&school.address)
        .bind(school.latitude)
        .bind(school.longitude)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &school.name))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM schools WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(unavailable)
    }
}
