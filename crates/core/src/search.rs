//! Movie search filters.
//!
//! Title and director match by case-insensitive substring containment, year
//! by equality. Omitted filters are not applied; supplied filters combine
//! with AND.

use crate::truthy::supplied;

/// Escape character used in generated `ILIKE` patterns (PostgreSQL default).
const LIKE_ESCAPE: char = '\\';

/// Normalized filter set for `searchMovies`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieSearch {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
}

impl MovieSearch {
    /// Build a filter set from raw arguments. Empty strings and a zero year
    /// count as omitted.
    pub fn from_args(title: Option<String>, director: Option<String>, year: Option<i32>) -> Self {
        Self {
            title: supplied(title),
            director: supplied(director),
            year: supplied(year),
        }
    }

    /// `true` when no filter applies, i.e. the search is a plain listing.
    pub fn is_unfiltered(&self) -> bool {
        self.title.is_none() && self.director.is_none() && self.year.is_none()
    }

    /// `ILIKE` pattern for the title filter, if any.
    pub fn title_pattern(&self) -> Option<String> {
        self.title.as_deref().map(contains_pattern)
    }

    /// `ILIKE` pattern for the director filter, if any.
    pub fn director_pattern(&self) -> Option<String> {
        self.director.as_deref().map(contains_pattern)
    }
}

/// Build an `ILIKE` pattern matching `needle` anywhere in the column.
///
/// LIKE metacharacters in `needle` are escaped so they match literally.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
