use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("playlist {0} already exists")]
    AlreadyExists(String),

    #[error("no playlists exist yet")]
    NoPlaylists,

    #[error("playlist {0} not found")]
    PlaylistNotFound(String),

    #[error("song {title} not found in playlist {playlist}")]
    SongNotFound { playlist: String, title: String },
}
