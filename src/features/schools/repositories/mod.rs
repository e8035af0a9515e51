//! Persistence port for school records.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::error::AppError;
use crate::features::schools::models::{NewSchool, School};

#[cfg(test)]
mod memory;
mod postgres;

#[cfg(test)]
pub use memory::InMemorySchoolRepository;
pub use postgres::PgSchoolRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("a school named '{0}' already exists")]
    DuplicateName(String),

    #[error("school {0} not found")]
    NotFound(i64),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateName(name) => AppError::DuplicateName(name),
            RepositoryError::NotFound(id) => AppError::NotFound(format!("School {} not found", id)),
            RepositoryError::Unavailable(msg) => AppError::StorageUnavailable(msg),
        }
    }
}

/// Storage for school records.
///
/// Ids and timestamps are assigned by the storage. Name uniqueness is enforced
/// on every write, so `create` and `update` may both return `DuplicateName`.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    async fn create(&self, school: &NewSchool) -> Result<School, RepositoryError>;

    async fn name_exists(&self, name: &str) -> Result<bool, RepositoryError>;

    /// Every stored school, in storage order.
    async fn list(&self) -> Result<Vec<School>, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<School, RepositoryError>;

    /// Replace every caller-supplied field of school `id`.
    async fn update(&self, id: i64, school: &NewSchool) -> Result<(), RepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Round trip to the storage backend.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
