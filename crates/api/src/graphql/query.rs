use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use super::db;
use super::types::{GenreObject, MovieObject};
use crate::handlers::{genre, movie};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every movie in the catalog.
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<MovieObject>> {
        let movies = movie::list(db(ctx)?).await.map_err(|e| e.extend())?;
        Ok(movies.into_iter().map(MovieObject::from).collect())
    }

    /// Movies matching every supplied filter. Title and director match by
    /// case-insensitive substring, year exactly.
    async fn search_movies(
        &self,
        ctx: &Context<'_>,
        title: Option<String>,
        director: Option<String>,
        year: Option<i32>,
    ) -> Result<Vec<MovieObject>> {
        let movies = movie::search(db(ctx)?, title, director, year)
            .await
            .map_err(|e| e.extend())?;
        Ok(movies.into_iter().map(MovieObject::from).collect())
    }

    /// The movie whose id equals `genreId`.
    async fn movies_by_genre(
        &self,
        ctx: &Context<'_>,
        genre_id: ID,
    ) -> Result<Option<MovieObject>> {
        let found = movie::find_by_genre_id(db(ctx)?, &genre_id)
            .await
            .map_err(|e| e.extend())?;
        Ok(found.map(MovieObject::from))
    }

    /// The genre whose id equals `movieId`.
    async fn genre_by_movie(
        &self,
        ctx: &Context<'_>,
        movie_id: ID,
    ) -> Result<Option<GenreObject>> {
        let found = genre::find_by_movie_id(db(ctx)?, &movie_id)
            .await
            .map_err(|e| e.extend())?;
        Ok(found.map(GenreObject::from))
    }

    /// Every genre in the catalog.
    async fn genres(&self, ctx: &Context<'_>) -> Result<Vec<GenreObject>> {
        let genres = genre::list(db(ctx)?).await.map_err(|e| e.extend())?;
        Ok(genres.into_iter().map(GenreObject::from).collect())
    }
}
