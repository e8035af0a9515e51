#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum::Router;

#[cfg(test)]
use crate::features::{
    health,
    schools::{self, repositories::InMemorySchoolRepository, SchoolRepository, SchoolService},
};

/// Router with every feature wired to a fresh in-memory repository
#[cfg(test)]
pub fn test_app() -> Router {
    let repository: Arc<dyn SchoolRepository> = Arc::new(InMemorySchoolRepository::new());
    let school_service = Arc::new(SchoolService::new(Arc::clone(&repository)));

    Router::new()
        .merge(schools::routes::routes(school_service))
        .merge(health::routes::routes(repository))
}
