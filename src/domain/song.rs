use std::fmt::Display;

/// Represent a single track in a playlist.
///
/// Songs are never modified once created.
/// Two songs are "the same" for removal purposes when their titles match ignoring case,
/// see [`Song::has_title`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    title: String,
    artist: String,
    album: String,
    genre: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            genre: genre.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// case-insensitive title comparison, char by char
    pub fn has_title(&self, title: &str) -> bool {
        self.title
            .chars()
            .flat_map(char::to_lowercase)
            .eq(title.chars().flat_map(char::to_lowercase))
    }
}

impl Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({}) [{}]",
            self.artist, self.title, self.album, self.genre
        )
    }
}
