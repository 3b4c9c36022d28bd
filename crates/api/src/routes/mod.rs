//! HTTP routes.
//!
//! ```text
//! /health      GET   service and database health
//! /graphql     POST  query and mutation documents
//! /graphql     GET   GraphiQL IDE (when enabled)
//! ```

pub mod graphql;
pub mod health;
