use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::schools::handlers;
use crate::features::schools::services::SchoolService;

/// Create routes for the schools feature
pub fn routes(service: Arc<SchoolService>) -> Router {
    Router::new()
        .route("/api/addSchool", post(handlers::add_school))
        .route("/api/listSchools", get(handlers::list_schools))
        .route("/api/schools", get(handlers::get_all_schools))
        .route(
            "/api/schools/{id}",
            get(handlers::get_school)
                .put(handlers::update_school)
                .delete(handlers::delete_school),
        )
        .with_state(service)
}
