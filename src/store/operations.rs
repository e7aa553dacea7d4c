use std::collections::BTreeMap;

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    domain::{playlist::Playlist, song::Song},
    store::{error::StoreError, search::SearchField},
};

/// Playlist with songs matching a search
#[derive(Debug)]
pub struct SearchHit {
    pub playlist: String,
    pub songs: Vec<Song>,
}

/// Owns every playlist and implements the operations available from the menu.
///
/// Every operation validates before mutating, so a failed call leaves the store untouched.
pub struct PlaylistStore {
    playlists: BTreeMap<String, Playlist>,
    rng: StdRng,
}

impl Default for PlaylistStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// store with reproducible shuffles
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            playlists: BTreeMap::new(),
            rng,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(name)
    }

    /// All playlists, ordered by name
    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<(), StoreError> {
        if self.playlists.contains_key(name) {
            log::info!("rejected duplicate playlist {name:?}");
            return Err(StoreError::AlreadyExists(name.to_string()));
        }
        self.playlists.insert(name.to_string(), Playlist::new(name));
        log::debug!("created playlist {name:?}");
        Ok(())
    }

    /// Fails with [`StoreError::NoPlaylists`] before looking the name up when the store is empty.
    pub fn add_song(&mut self, playlist: &str, song: Song) -> Result<(), StoreError> {
        if self.playlists.is_empty() {
            return Err(StoreError::NoPlaylists);
        }
        let target = self.find_mut(playlist)?;
        log::debug!("adding {song} to {playlist:?}");
        target.add_song(song);
        Ok(())
    }

    /// Searches every playlist. Playlists without matches are left out.
    pub fn search_songs(&self, field: SearchField, term: &str) -> Vec<SearchHit> {
        let term = term.to_lowercase();
        let hits = self
            .playlists
            .values()
            .filter_map(|p| {
                let songs = p.search(|s| field.matches(s, &term));
                (!songs.is_empty()).then(|| SearchHit {
                    playlist: p.name().to_string(),
                    songs,
                })
            })
            .collect::<Vec<_>>();
        let matched = hits.len();
        log::debug!("search {field:?} {term:?} matched {matched} playlists");
        hits
    }

    /// Removes every song titled `title` (ignoring case) from the playlist.
    pub fn remove_song(&mut self, playlist: &str, title: &str) -> Result<(), StoreError> {
        let target = self.find_mut(playlist)?;
        if !target.remove_song(title) {
            return Err(StoreError::SongNotFound {
                playlist: playlist.to_string(),
                title: title.to_string(),
            });
        }
        log::debug!("removed {title:?} from {playlist:?}");
        Ok(())
    }

    pub fn shuffle_playlist(&mut self, playlist: &str) -> Result<(), StoreError> {
        let target = self
            .playlists
            .get_mut(playlist)
            .ok_or_else(|| StoreError::PlaylistNotFound(playlist.to_string()))?;
        target.shuffle(&mut self.rng);
        log::debug!("shuffled {playlist:?}");
        Ok(())
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Playlist, StoreError> {
        self.playlists.get_mut(name).ok_or_else(|| {
            log::info!("playlist {name:?} not found");
            StoreError::PlaylistNotFound(name.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::song::Song,
        store::{error::StoreError, operations::PlaylistStore, search::SearchField},
    };

    fn money_trees() -> Song {
        Song::new(
            "Money Trees",
            "Kendrick Lamar",
            "good kid, m.A.A.d city",
            "Hip-Hop",
        )
    }

    fn setup_store() -> anyhow::Result<PlaylistStore> {
        let mut store = PlaylistStore::with_seed(1);
        store.create_playlist("Hits")?;
        store.add_song("Hits", money_trees())?;
        Ok(store)
    }

    fn titles(store: &PlaylistStore, playlist: &str) -> Vec<String> {
        store
            .get(playlist)
            .map(|p| p.songs().iter().map(|s| s.title().to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_create_duplicate_is_rejected() -> anyhow::Result<()> {
        let mut store = setup_store()?;

        let err = store.create_playlist("Hits").unwrap_err();
        assert_eq!(err, StoreError::AlreadyExists("Hits".into()));
        assert_eq!(store.playlists().count(), 1);
        assert_eq!(store.get("Hits").map(|p| p.len()), Some(1));

        // names are case-sensitive
        store.create_playlist("hits")?;
        assert_eq!(store.playlists().count(), 2);
        Ok(())
    }

    #[test]
    fn test_add_song_to_empty_store() {
        let mut store = PlaylistStore::with_seed(1);
        assert_eq!(
            store.add_song("Hits", money_trees()),
            Err(StoreError::NoPlaylists)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_song_to_missing_playlist() -> anyhow::Result<()> {
        let mut store = setup_store()?;

        assert_eq!(
            store.add_song("Chill", money_trees()),
            Err(StoreError::PlaylistNotFound("Chill".into()))
        );
        assert!(store.get("Chill").is_none());
        assert_eq!(store.get("Hits").map(|p| p.len()), Some(1));
        Ok(())
    }

    #[test]
    fn test_search_across_playlists() -> anyhow::Result<()> {
        let mut store = setup_store()?;
        store.create_playlist("Chill")?;
        store.create_playlist("Empty")?;
        let passionfruit = Song::new("Passionfruit", "Drake", "More Life", "R&B");
        let pools = Song::new("Swimming Pools", "Kendrick Lamar", "GKMC", "Hip-Hop");
        store.add_song("Chill", passionfruit)?;
        store.add_song("Chill", pools)?;

        let hits = store.search_songs(SearchField::ByArtist, "KENDRICK");
        let summary = hits
            .iter()
            .map(|h| {
                (
                    h.playlist.as_str(),
                    h.songs.iter().map(|s| s.title()).collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("Chill", vec!["Swimming Pools"]),
                ("Hits", vec!["Money Trees"]),
            ]
        );

        let hits = store.search_songs(SearchField::ByGenre, "r&b");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].playlist, "Chill");

        assert!(store.search_songs(SearchField::Invalid, "").is_empty());
        Ok(())
    }

    #[test]
    fn test_remove_song() -> anyhow::Result<()> {
        let mut store = setup_store()?;

        assert_eq!(
            store.remove_song("Chill", "money trees"),
            Err(StoreError::PlaylistNotFound("Chill".into()))
        );
        assert_eq!(
            store.remove_song("Hits", "HUMBLE."),
            Err(StoreError::SongNotFound {
                playlist: "Hits".into(),
                title: "HUMBLE.".into()
            })
        );

        store.remove_song("Hits", "money trees")?;
        assert_eq!(store.get("Hits").map(|p| p.len()), Some(0));
        Ok(())
    }

    #[test]
    fn test_shuffle_playlist() -> anyhow::Result<()> {
        let mut store = setup_store()?;
        for title in ["a", "b", "c", "d", "e"] {
            store.add_song("Hits", Song::new(title, "x", "y", "z"))?;
        }

        assert_eq!(
            store.shuffle_playlist("Chill"),
            Err(StoreError::PlaylistNotFound("Chill".into()))
        );

        store.shuffle_playlist("Hits")?;
        let mut titles = titles(&store, "Hits");
        assert_eq!(titles.len(), 6);
        titles.sort();
        assert_eq!(titles, vec!["Money Trees", "a", "b", "c", "d", "e"]);
        Ok(())
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() -> anyhow::Result<()> {
        let order = |seed| -> anyhow::Result<Vec<String>> {
            let mut store = PlaylistStore::with_seed(seed);
            store.create_playlist("Hits")?;
            for i in 0..10 {
                store.add_song("Hits", Song::new(i.to_string(), "x", "y", "z"))?;
            }
            store.shuffle_playlist("Hits")?;
            Ok(titles(&store, "Hits"))
        };

        assert_eq!(order(42)?, order(42)?);
        Ok(())
    }
}
