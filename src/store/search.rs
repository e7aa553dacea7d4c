//! Field selection for song search

use crate::domain::song::Song;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    ByTitle,
    ByArtist,
    ByGenre,
    /// Unknown selection, matches nothing
    Invalid,
}

impl SearchField {
    /// `term` must already be lower-cased.
    pub fn matches(self, song: &Song, term: &str) -> bool {
        let field = match self {
            Self::ByTitle => song.title(),
            Self::ByArtist => song.artist(),
            Self::ByGenre => song.genre(),
            Self::Invalid => return false,
        };
        field.to_lowercase().contains(term)
    }
}
