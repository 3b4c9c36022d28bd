//! GraphQL output types.

use async_graphql::{SimpleObject, ID};
use cinedex_core::types::DbId;
use cinedex_db::models::genre::Genre;
use cinedex_db::models::movie::Movie;

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Movie")]
pub struct MovieObject {
    pub id: ID,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre_id: DbId,
}

impl From<Movie> for MovieObject {
    fn from(movie: Movie) -> Self {
        Self {
            id: ID::from(movie.id),
            title: movie.title,
            director: movie.director,
            year: movie.year,
            genre_id: movie.genre_id,
        }
    }
}

/// A genre with at most one associated movie.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Genre")]
pub struct GenreObject {
    pub id: ID,
    pub name: String,
    pub movie_id: Option<DbId>,
}

impl From<Genre> for GenreObject {
    fn from(genre: Genre) -> Self {
        Self {
            id: ID::from(genre.id),
            name: genre.name,
            movie_id: genre.movie_id,
        }
    }
}
