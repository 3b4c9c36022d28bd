//! Movie entity model and DTOs.

use cinedex_core::types::DbId;
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre_id: DbId,
}

/// DTO for creating a movie. Every field is required.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre_id: DbId,
}

/// DTO for updating a movie. Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub genre_id: Option<DbId>,
}
