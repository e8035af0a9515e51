use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request DTO for adding a school
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSchoolDto {
    /// School name, unique across all schools
    #[validate(
        length(min = 2, max = 100, message = "Please enter a valid school name (2-100 characters)"),
        regex(
            path = "*crate::shared::validation::NOT_BLANK_REGEX",
            message = "Please enter a valid school name (2-100 characters)"
        )
    )]
    pub name: String,

    #[validate(
        length(min = 5, max = 200, message = "Please enter a valid address (5-200 characters)"),
        regex(
            path = "*crate::shared::validation::NOT_BLANK_REGEX",
            message = "Please enter a valid address (5-200 characters)"
        )
    )]
    pub address: String,

    #[validate(custom(function = "crate::shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "crate::shared::validation::validate_longitude"))]
    pub longitude: f64,
}

/// Request DTO for replacing every field of a school
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSchoolDto {
    #[validate(
        length(min = 2, max = 100, message = "Please enter a valid school name (2-100 characters)"),
        regex(
            path = "*crate::shared::validation::NOT_BLANK_REGEX",
            message = "Please enter a valid school name (2-100 characters)"
        )
    )]
    pub name: String,

    #[validate(
        length(min = 5, max = 200, message = "Please enter a valid address (5-200 characters)"),
        regex(
            path = "*crate::shared::validation::NOT_BLANK_REGEX",
            message = "Please enter a valid address (5-200 characters)"
        )
    )]
    pub address: String,

    #[validate(custom(function = "crate::shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "crate::shared::validation::validate_longitude"))]
    pub longitude: f64,
}

/// Response DTO for a stored school
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchoolResponseDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A school annotated with its distance from the query point
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RankedSchoolDto {
    #[serde(flatten)]
    pub school: SchoolResponseDto,
    /// Great-circle distance in kilometers
    pub distance: f64,
}

/// Result of a plain listing, ranked when a reference point was given
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SchoolListDto {
    Ranked(Vec<RankedSchoolDto>),
    Plain(Vec<SchoolResponseDto>),
}

impl SchoolListDto {
    pub fn total(&self) -> usize {
        match self {
            SchoolListDto::Ranked(schools) => schools.len(),
            SchoolListDto::Plain(schools) => schools.len(),
        }
    }
}

/// Reference point for proximity listing (both coordinates required)
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbySchoolsQuery {
    /// Latitude of the reference point (-90 to 90)
    #[validate(custom(function = "crate::shared::validation::validate_latitude"))]
    pub latitude: f64,

    /// Longitude of the reference point (-180 to 180)
    #[validate(custom(function = "crate::shared::validation::validate_longitude"))]
    pub longitude: f64,
}

/// Optional reference point; results are proximity-sorted only when both are present
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSchoolsQuery {
    #[validate(custom(function = "crate::shared::validation::validate_latitude"))]
    pub latitude: Option<f64>,

    #[validate(custom(function = "crate::shared::validation::validate_longitude"))]
    pub longitude: Option<f64>,
}

impl ListSchoolsQuery {
    pub fn reference_point(&self) -> Option<NearbySchoolsQuery> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(NearbySchoolsQuery {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateSchoolDto {
        CreateSchoolDto {
            name: "Lotus Valley".to_string(),
            address: "Sector 126, Noida".to_string(),
            latitude: 28.5355,
            longitude: 77.391,
        }
    }

    #[test]
    fn test_valid_school_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_name_length_and_blank() {
        let short = CreateSchoolDto {
            name: "A".to_string(),
            ..valid_dto()
        };
        assert!(short.validate().is_err());

        let blank = CreateSchoolDto {
            name: "     ".to_string(),
            ..valid_dto()
        };
        assert!(blank.validate().is_err());

        let long = CreateSchoolDto {
            name: "x".repeat(101),
            ..valid_dto()
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_address_too_short() {
        let dto = CreateSchoolDto {
            address: "Road".to_string(),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("address"));
    }

    #[test]
    fn test_coordinates_out_of_range() {
        let dto = CreateSchoolDto {
            latitude: 91.0,
            longitude: -181.0,
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("latitude"));
        assert!(fields.contains_key("longitude"));
    }

    #[test]
    fn test_list_query_reference_point() {
        let both = ListSchoolsQuery {
            latitude: Some(12.9716),
            longitude: Some(77.5946),
        };
        assert!(both.validate().is_ok());
        assert!(both.reference_point().is_some());

        let partial = ListSchoolsQuery {
            latitude: Some(12.9716),
            longitude: None,
        };
        assert!(partial.reference_point().is_none());

        let invalid = ListSchoolsQuery {
            latitude: Some(-100.0),
            longitude: None,
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_ranked_school_flattens_fields() {
        let now = Utc::now();
        let ranked = RankedSchoolDto {
            school: SchoolResponseDto {
                id: 7,
                name: "Lotus Valley".to_string(),
                address: "Sector 126, Noida".to_string(),
                latitude: 28.5355,
                longitude: 77.391,
                created_at: now,
                updated_at: now,
            },
            distance: 1.5,
        };

        let value = serde_json::to_value(&ranked).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Lotus Valley");
        assert_eq!(value["distance"], 1.5);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("school").is_none());
    }
}
