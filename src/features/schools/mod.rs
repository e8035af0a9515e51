//! School records and proximity search.
//!
//! Schools are stored with a name, address and coordinates. Listing by
//! proximity fetches every school and ranks them by great-circle distance
//! from the caller's point (no spatial index).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/addSchool` | Add a school |
//! | GET | `/api/listSchools?latitude=&longitude=` | All schools, nearest first |
//! | GET | `/api/schools` | All schools, optionally ranked |
//! | GET | `/api/schools/{id}` | Get school by id |
//! | PUT | `/api/schools/{id}` | Replace a school's fields |
//! | DELETE | `/api/schools/{id}` | Delete a school |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgSchoolRepository, SchoolRepository};
pub use services::SchoolService;
