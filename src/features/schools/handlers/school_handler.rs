use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::schools::dtos::{
    CreateSchoolDto, ListSchoolsQuery, NearbySchoolsQuery, RankedSchoolDto, SchoolListDto,
    SchoolResponseDto, UpdateSchoolDto,
};
use crate::features::schools::services::SchoolService;
use crate::shared::types::{ApiResponse, Meta};

/// Add a new school
#[utoipa::path(
    post,
    path = "/api/addSchool",
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "School created", body = ApiResponse<SchoolResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A school with this name already exists")
    ),
    tag = "schools"
)]
pub async fn add_school(
    State(service): State<Arc<SchoolService>>,
    AppJson(dto): AppJson<CreateSchoolDto>,
) -> Result<(StatusCode, Json<ApiResponse<SchoolResponseDto>>)> {
    let school = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(school),
            Some("School created successfully".to_string()),
            None,
        )),
    ))
}

/// List all schools sorted by distance from the given point
#[utoipa::path(
    get,
    path = "/api/listSchools",
    params(NearbySchoolsQuery),
    responses(
        (status = 200, description = "Schools ordered nearest first", body = ApiResponse<Vec<RankedSchoolDto>>),
        (status = 400, description = "Missing or out-of-range coordinates")
    ),
    tag = "schools"
)]
pub async fn list_schools(
    State(service): State<Arc<SchoolService>>,
    AppQuery(query): AppQuery<NearbySchoolsQuery>,
) -> Result<Json<ApiResponse<Vec<RankedSchoolDto>>>> {
    let schools = service.list_nearby(query).await?;
    let total = schools.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(schools),
        Some("Schools sorted by proximity".to_string()),
        Some(Meta { total }),
    )))
}

/// List all schools
///
/// Returned in storage order, or nearest first when both `latitude` and
/// `longitude` are given.
#[utoipa::path(
    get,
    path = "/api/schools",
    params(ListSchoolsQuery),
    responses(
        (status = 200, description = "List of schools", body = ApiResponse<SchoolListDto>),
        (status = 400, description = "Out-of-range coordinates")
    ),
    tag = "schools"
)]
pub async fn get_all_schools(
    State(service): State<Arc<SchoolService>>,
    AppQuery(query): AppQuery<ListSchoolsQuery>,
) -> Result<Json<ApiResponse<SchoolListDto>>> {
    let schools = service.list(query).await?;
    let total = schools.total() as i64;
    Ok(Json(ApiResponse::success(
        Some(schools),
        None,
        Some(Meta { total }),
    )))
}

/// Get school by id
#[utoipa::path(
    get,
    path = "/api/schools/{id}",
    params(
        ("id" = i64, Path, description = "School id")
    ),
    responses(
        (status = 200, description = "School found", body = ApiResponse<SchoolResponseDto>),
        (status = 404, description = "School not found")
    ),
    tag = "schools"
)]
pub async fn get_school(
    State(service): State<Arc<SchoolService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<SchoolResponseDto>>> {
    let school = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(school), None, None)))
}

/// Replace a school's name, address and coordinates
#[utoipa::path(
    put,
    path = "/api/schools/{id}",
    params(
        ("id" = i64, Path, description = "School id")
    ),
    request_body = UpdateSchoolDto,
    responses(
        (status = 200, description = "School updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "School not found"),
        (status = 409, description = "Another school already has this name")
    ),
    tag = "schools"
)]
pub async fn update_school(
    State(service): State<Arc<SchoolService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateSchoolDto>,
) -> Result<Json<ApiResponse<()>>> {
    service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("School updated successfully".to_string()),
        None,
    )))
}

/// Delete a school
#[utoipa::path(
    delete,
    path = "/api/schools/{id}",
    params(
        ("id" = i64, Path, description = "School id")
    ),
    responses(
        (status = 200, description = "School deleted"),
        (status = 404, description = "School not found")
    ),
    tag = "schools"
)]
pub async fn delete_school(
    State(service): State<Arc<SchoolService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("School deleted successfully".to_string()),
        None,
    )))
}
