//! GraphQL schema for the catalog.
//!
//! - [`QueryRoot`]: list, search and identity lookups
//! - [`MutationRoot`]: create, update and delete for movies and genres
//!
//! The schema carries no database state of its own. The HTTP layer attaches
//! a pool handle to every request and resolvers read it with [`db`].

mod mutation;
mod query;
mod types;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema};
use cinedex_db::DbPool;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{GenreObject, MovieObject};

use crate::error::AppError;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema.
pub fn build_schema() -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).finish()
}

/// The database handle attached to the current request.
pub(crate) fn db<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a DbPool> {
    ctx.data::<DbPool>().map_err(|_| {
        AppError::InternalError("database handle missing from request data".into()).extend()
    })
}
