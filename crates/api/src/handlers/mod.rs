//! Per-record operations behind the GraphQL resolvers.
//!
//! Each function performs exactly one repository call against the pool
//! handle it is given and returns an [`AppResult`](crate::error::AppResult).

pub mod genre;
pub mod movie;
