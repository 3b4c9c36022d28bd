//! Operations on genres.

use cinedex_core::messages::{delete_outcome, GENRE_NOT_FOUND};
use cinedex_core::truthy::supplied;
use cinedex_core::types::{parse_id, DbId};
use cinedex_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use cinedex_db::repositories::GenreRepo;
use cinedex_db::DbPool;

use crate::error::AppResult;

/// All genres.
pub async fn list(pool: &DbPool) -> AppResult<Vec<Genre>> {
    Ok(GenreRepo::list(pool).await?)
}

/// The genre whose own id equals `movie_id`.
pub async fn find_by_movie_id(pool: &DbPool, movie_id: &str) -> AppResult<Option<Genre>> {
    let id = parse_id(movie_id)?;
    Ok(GenreRepo::find_by_id(pool, id).await?)
}

/// Insert a genre.
pub async fn create(pool: &DbPool, input: CreateGenre) -> AppResult<Genre> {
    let genre = GenreRepo::create(pool, &input).await?;
    tracing::info!(genre_id = genre.id, movie_id = ?genre.movie_id, "Genre created");
    Ok(genre)
}

/// Apply the truthy arguments to a genre. `None` if the genre is absent.
pub async fn update(
    pool: &DbPool,
    id: DbId,
    name: Option<String>,
    movie_id: Option<DbId>,
) -> AppResult<Option<Genre>> {
    let input = UpdateGenre {
        name: supplied(name),
        movie_id: supplied(movie_id),
    };
    let genre = GenreRepo::update(pool, id, &input).await?;
    match &genre {
        Some(_) => tracing::info!(genre_id = id, "Genre updated"),
        None => tracing::debug!(genre_id = id, "Update skipped, genre not found"),
    }
    Ok(genre)
}

/// Delete a genre, returning the plain-text outcome.
pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<&'static str> {
    let deleted = GenreRepo::delete(pool, id).await?;
    if deleted {
        tracing::info!(genre_id = id, "Genre deleted");
    }
    Ok(delete_outcome(deleted, GENRE_NOT_FOUND))
}
