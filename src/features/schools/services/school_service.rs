use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::schools::dtos::{
    CreateSchoolDto, ListSchoolsQuery, NearbySchoolsQuery, RankedSchoolDto, SchoolListDto,
    SchoolResponseDto, UpdateSchoolDto,
};
use crate::features::schools::models::NewSchool;
use crate::features::schools::repositories::SchoolRepository;
use crate::features::schools::services::proximity::{self, Coordinates};

/// Service for managing schools and ranking them by distance
pub struct SchoolService {
    repository: Arc<dyn SchoolRepository>,
}

impl SchoolService {
    pub fn new(repository: Arc<dyn SchoolRepository>) -> Self {
        Self { repository }
    }

    /// Add a school. Rejects invalid fields and names that are already taken.
    pub async fn create(&self, dto: CreateSchoolDto) -> Result<SchoolResponseDto> {
        dto.validate()?;

        // Concurrent creates can both pass this check; the unique constraint decides.
        if self.repository.name_exists(&dto.name).await? {
            return Err(AppError::DuplicateName(dto.name));
        }

        let school = self.repository.create(&NewSchool::from(dto)).await?;

        tracing::info!("School created: id={}, name={}", school.id, school.name);

        Ok(school.into())
    }

    /// All schools ordered by distance from the reference point, nearest first
    pub async fn list_nearby(&self, query: NearbySchoolsQuery) -> Result<Vec<RankedSchoolDto>> {
        query.validate()?;

        let schools = self.repository.list().await?;
        let origin = Coordinates::new(query.latitude, query.longitude);

        tracing::debug!(
            "Ranking {} schools from ({}, {})",
            schools.len(),
            origin.latitude,
            origin.longitude
        );

        Ok(proximity::rank(origin, schools)
            .into_iter()
            .map(|ranked| RankedSchoolDto {
                school: ranked.item.into(),
                distance: ranked.distance,
            })
            .collect())
    }

    /// All schools; proximity-sorted when the query carries both coordinates
    pub async fn list(&self, query: ListSchoolsQuery) -> Result<SchoolListDto> {
        query.validate()?;

        match query.reference_point() {
            Some(point) => Ok(SchoolListDto::Ranked(self.list_nearby(point).await?)),
            None => {
                let schools = self.repository.list().await?;
                Ok(SchoolListDto::Plain(
                    schools.into_iter().map(|s| s.into()).collect(),
                ))
            }
        }
    }

    pub async fn get(&self, id: i64) -> Result<SchoolResponseDto> {
        Ok(self.repository.get_by_id(id).await?.into())
    }

    /// Replace every field of a school.
    ///
    /// No name pre-check here; renaming onto another school's name is still
    /// rejected by the storage's unique constraint.
    pub async fn update(&self, id: i64, dto: UpdateSchoolDto) -> Result<()> {
        dto.validate()?;

        self.repository.update(id, &NewSchool::from(dto)).await?;

        tracing::info!("School updated: id={}", id);

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await?;

        tracing::info!("School deleted: id={}", id);

        Ok(())
    }
}
