//! Repository for the `movies` table.

use cinedex_core::search::MovieSearch;
use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, director, year, genre_id";

/// Provides CRUD and search operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie inside a transaction, returning the created row
    /// with its generated id.
    ///
    /// `genre_id` is not checked beyond the foreign key constraint.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO movies (title, director, year, genre_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.director)
            .bind(input.year)
            .bind(input.genre_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(movie)
    }

    /// Find a movie by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every movie in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// List movies matching every filter present in `search`.
    ///
    /// Title and director use `ILIKE` with an escaped containment pattern;
    /// year is compared for equality. A `NULL` parameter disables its filter.
    pub async fn search(pool: &PgPool, search: &MovieSearch) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE ($1::text IS NULL OR title ILIKE $1)
               AND ($2::text IS NULL OR director ILIKE $2)
               AND ($3::integer IS NULL OR year = $3)
             ORDER BY id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(search.title_pattern())
            .bind(search.director_pattern())
            .bind(search.year)
            .fetch_all(pool)
            .await
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                director = COALESCE($3, director),
                year = COALESCE($4, year),
                genre_id = COALESCE($5, genre_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.director)
            .bind(input.year)
            .bind(input.genre_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all movies.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
