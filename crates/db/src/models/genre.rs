//! Genre entity model and DTOs.

use cinedex_core::types::DbId;
use sqlx::FromRow;

/// A row from the `genre` table.
///
/// `movie_id` is stored in the `movies` column: a single optional reference
/// to a movie, not a collection.
#[derive(Debug, Clone, FromRow)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub movie_id: Option<DbId>,
}

/// DTO for creating a genre.
#[derive(Debug, Clone)]
pub struct CreateGenre {
    pub name: String,
    pub movie_id: Option<DbId>,
}

/// DTO for updating a genre. Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UpdateGenre {
    pub name: Option<String>,
    pub movie_id: Option<DbId>,
}
