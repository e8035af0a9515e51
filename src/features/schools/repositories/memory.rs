use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::features::schools::models::{NewSchool, School};
use crate::features::schools::repositories::{RepositoryError, SchoolRepository};

#[derive(Default)]
struct Table {
    rows: Vec<School>,
    last_id: i64,
}

/// In-process storage with the same uniqueness and not-found rules as the SQL table
#[derive(Default)]
pub struct InMemorySchoolRepository {
    table: Mutex<Table>,
    offline: bool,
}

impl InMemorySchoolRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails as if the database were down
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    fn table(&self) -> Result<std::sync::MutexGuard<'_, Table>, RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Unavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(self.table.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

#[async_trait]
impl SchoolRepository for InMemorySchoolRepository {
    async fn create(&self, school: &NewSchool) -> Result<School, RepositoryError> {
        let mut table = self.table()?;
        if table.rows.iter().any(|row| row.name == school.name) {
            return Err(RepositoryError::DuplicateName(school.name.clone()));
        }

        table.last_id += 1;
        let now = Utc::now();
        let row = School {
            id: table.last_id,
            name: school.name.clone(),
            address: school.address.clone(),
            latitude: school.latitude,
            longitude: school.longitude,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn name_exists(&self, name: &str) -> Result<bool, RepositoryError> {
        let table = self.table()?;
        Ok(table.rows.iter().any(|row| row.name == name))
    }

    async fn list(&self) -> Result<Vec<School>, RepositoryError> {
        let table = self.table()?;
        Ok(table.rows.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<School, RepositoryError> {
        let table = self.table()?;
        table
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i64, school: &NewSchool) -> Result<(), RepositoryError> {
        let mut table = self.table()?;
        let index = table
            .rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        if table
            .rows
            .iter()
            .any(|row| row.id != id && row.name == school.name)
        {
            return Err(RepositoryError::DuplicateName(school.name.clone()));
        }

        let row = &mut table.rows[index];
        row.name = school.name.clone();
        row.address = school.address.clone();
        row.latitude = school.latitude;
        row.longitude = school.longitude;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut table = self.table()?;
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        if table.rows.len() == before {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.table().map(|_| ())
    }
}
