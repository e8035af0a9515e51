use utoipa::{Modify, OpenApi};

use crate::features::health::routes as health_routes;
use crate::features::schools::{dtos as schools_dtos, handlers as schools_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Schools
        schools_handlers::add_school,
        schools_handlers::list_schools,
        schools_handlers::get_all_schools,
        schools_handlers::get_school,
        schools_handlers::update_school,
        schools_handlers::delete_school,
        // Health
        health_routes::health_check,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Schools
            schools_dtos::CreateSchoolDto,
            schools_dtos::UpdateSchoolDto,
            schools_dtos::SchoolResponseDto,
            schools_dtos::RankedSchoolDto,
            schools_dtos::SchoolListDto,
            ApiResponse<schools_dtos::SchoolResponseDto>,
            ApiResponse<Vec<schools_dtos::RankedSchoolDto>>,
            ApiResponse<schools_dtos::SchoolListDto>,
            // Health
            health_routes::HealthResponseDto,
        )
    ),
    tags(
        (name = "schools", description = "School records and proximity listing"),
        (name = "health", description = "Service liveness"),
    ),
    info(
        title = "School Locator API",
        version = "0.1.0",
        description = "Store schools and list them by distance",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_school_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/addSchool",
            "/api/listSchools",
            "/api/schools",
            "/api/schools/{id}",
            "/health",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {}",
                expected
            );
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Schools".to_string(),
            version: "9.9.9".to_string(),
            description: "custom".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Schools");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("custom"));
    }
}
