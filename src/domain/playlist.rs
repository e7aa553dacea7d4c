use std::fmt::Display;

use rand::{Rng, seq::SliceRandom};

use super::song::Song;

/// Named, ordered collection of songs.
///
/// The name is fixed at creation. Songs keep insertion order until [`Playlist::shuffle`].
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    songs: Vec<Song>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Removes every song whose title matches `title` ignoring case.
    ///
    /// Returns `true` if at least one song was removed.
    pub fn remove_song(&mut self, title: &str) -> bool {
        let before = self.songs.len();
        self.songs.retain(|s| !s.has_title(title));
        self.songs.len() != before
    }

    /// Songs satisfying `criteria`, in playlist order.
    pub fn search<P>(&self, criteria: P) -> Vec<Song>
    where
        P: Fn(&Song) -> bool,
    {
        self.songs.iter().filter(|s| criteria(s)).cloned().collect()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.songs.shuffle(rng);
    }
}

impl Display for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} songs)", self.name, self.songs.len())
    }
}
