//! Operations on movies.

use cinedex_core::messages::{delete_outcome, MOVIE_NOT_FOUND};
use cinedex_core::search::MovieSearch;
use cinedex_core::truthy::supplied;
use cinedex_core::types::{parse_id, DbId};
use cinedex_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use cinedex_db::repositories::MovieRepo;
use cinedex_db::DbPool;

use crate::error::AppResult;

/// All movies.
pub async fn list(pool: &DbPool) -> AppResult<Vec<Movie>> {
    Ok(MovieRepo::list(pool).await?)
}

/// Movies matching the supplied filters. Empty strings and a zero year
/// count as omitted; with no filters this is the full listing.
pub async fn search(
    pool: &DbPool,
    title: Option<String>,
    director: Option<String>,
    year: Option<i32>,
) -> AppResult<Vec<Movie>> {
    let search = MovieSearch::from_args(title, director, year);
    tracing::debug!(?search, unfiltered = search.is_unfiltered(), "Searching movies");
    Ok(MovieRepo::search(pool, &search).await?)
}

/// The movie whose own id equals `genre_id`.
///
/// This is an identity lookup on the movies table, not a traversal of
/// `movies.genre_id`.
pub async fn find_by_genre_id(pool: &DbPool, genre_id: &str) -> AppResult<Option<Movie>> {
    let id = parse_id(genre_id)?;
    Ok(MovieRepo::find_by_id(pool, id).await?)
}

/// Insert a movie. The referenced genre is not checked beyond the foreign key.
pub async fn create(pool: &DbPool, input: CreateMovie) -> AppResult<Movie> {
    let movie = MovieRepo::create(pool, &input).await?;
    tracing::info!(movie_id = movie.id, genre_id = movie.genre_id, "Movie created");
    Ok(movie)
}

/// Apply the truthy arguments to a movie. `None` if the movie is absent.
pub async fn update(
    pool: &DbPool,
    id: DbId,
    title: Option<String>,
    director: Option<String>,
    year: Option<i32>,
    genre_id: Option<DbId>,
) -> AppResult<Option<Movie>> {
    let input = UpdateMovie {
        title: supplied(title),
        director: supplied(director),
        year: supplied(year),
        genre_id: supplied(genre_id),
    };
    let movie = MovieRepo::update(pool, id, &input).await?;
    match &movie {
        Some(_) => tracing::info!(movie_id = id, "Movie updated"),
        None => tracing::debug!(movie_id = id, "Update skipped, movie not found"),
    }
    Ok(movie)
}

/// Delete a movie, returning the plain-text outcome.
pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<&'static str> {
    let deleted = MovieRepo::delete(pool, id).await?;
    if deleted {
        tracing::info!(movie_id = id, "Movie deleted");
    }
    Ok(delete_outcome(deleted, MOVIE_NOT_FOUND))
}
