use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::schools::dtos::{CreateSchoolDto, SchoolResponseDto, UpdateSchoolDto};
use crate::features::schools::services::proximity::{Coordinates, Located};

/// Database model for a school
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Located for School {
    fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Caller-supplied fields of a school, used for both insert and full update
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<CreateSchoolDto> for NewSchool {
    fn from(dto: CreateSchoolDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

impl From<UpdateSchoolDto> for NewSchool {
    fn from(dto: UpdateSchoolDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

impl From<School> for SchoolResponseDto {
    fn from(s: School) -> Self {
        Self {
            id: s.id,
            name: s.name,
            address: s.address,
            latitude: s.latitude,
            longitude: s.longitude,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
