//! Liveness endpoint reporting whether the database answers.

pub mod routes;
