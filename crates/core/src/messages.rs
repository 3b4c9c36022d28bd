//! Plain-text results returned by the delete mutations.

/// Returned when a delete removed a row.
pub const DELETE_SUCCESS: &str = "Success";

/// Returned by `deleteMovie` when no movie has the given id.
pub const MOVIE_NOT_FOUND: &str = "That movie does not exist";

/// Returned by `deleteGenre` when no genre has the given id.
pub const GENRE_NOT_FOUND: &str = "That genre does not exist";

/// Pick the delete result message for an entity.
pub fn delete_outcome(deleted: bool, not_found: &'static str) -> &'static str {
    if deleted {
        DELETE_SUCCESS
    } else {
        not_found
    }
}
