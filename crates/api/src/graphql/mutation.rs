use async_graphql::{Context, ErrorExtensions, Object, Result};
use cinedex_core::types::DbId;
use cinedex_db::models::genre::CreateGenre;
use cinedex_db::models::movie::CreateMovie;

use super::db;
use super::types::{GenreObject, MovieObject};
use crate::handlers::{genre, movie};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a movie and return it with its generated id.
    async fn create_movie(
        &self,
        ctx: &Context<'_>,
        title: String,
        director: String,
        year: i32,
        genre_id: DbId,
    ) -> Result<MovieObject> {
        let input = CreateMovie {
            title,
            director,
            year,
            genre_id,
        };
        let created = movie::create(db(ctx)?, input)
            .await
            .map_err(|e| e.extend())?;
        Ok(created.into())
    }

    /// Update a movie. Omitted, empty and zero arguments leave the stored
    /// value unchanged. Returns `null` if the movie does not exist.
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: DbId,
        title: Option<String>,
        director: Option<String>,
        year: Option<i32>,
        genre_id: Option<DbId>,
    ) -> Result<Option<MovieObject>> {
        let updated = movie::update(db(ctx)?, id, title, director, year, genre_id)
            .await
            .map_err(|e| e.extend())?;
        Ok(updated.map(MovieObject::from))
    }

    /// Delete a movie. Returns `"Success"` or a "does not exist" message.
    async fn delete_movie(&self, ctx: &Context<'_>, id: DbId) -> Result<String> {
        let outcome = movie::delete(db(ctx)?, id)
            .await
            .map_err(|e| e.extend())?;
        Ok(outcome.to_string())
    }

    /// Create a genre, optionally pointing at one movie.
    async fn create_genre(
        &self,
        ctx: &Context<'_>,
        name: String,
        movie_id: Option<DbId>,
    ) -> Result<GenreObject> {
        let created = genre::create(db(ctx)?, CreateGenre { name, movie_id })
            .await
            .map_err(|e| e.extend())?;
        Ok(created.into())
    }

    /// Update a genre. Omitted, empty and zero arguments leave the stored
    /// value unchanged. Returns `null` if the genre does not exist.
    async fn update_genre(
        &self,
        ctx: &Context<'_>,
        id: DbId,
        name: Option<String>,
        movie_id: Option<DbId>,
    ) -> Result<Option<GenreObject>> {
        let updated = genre::update(db(ctx)?, id, name, movie_id)
            .await
            .map_err(|e| e.extend())?;
        Ok(updated.map(GenreObject::from))
    }

    /// Delete a genre. Returns `"Success"` or a "does not exist" message.
    async fn delete_genre(&self, ctx: &Context<'_>, id: DbId) -> Result<String> {
        let outcome = genre::delete(db(ctx)?, id)
            .await
            .map_err(|e| e.extend())?;
        Ok(outcome.to_string())
    }
}
