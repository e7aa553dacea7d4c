//! Line-oriented text menu driving the playlist store

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::{
    domain::{POPULAR_ARTISTS, song::Song},
    store::{error::StoreError, operations::PlaylistStore, search::SearchField},
};

const EXIT: i32 = 7;

/// Interactive session over an input and an output stream.
///
/// Generic over the streams so the whole dialogue can be driven from memory.
pub struct Menu<R, W> {
    store: PlaylistStore,
    input: R,
    output: W,
}

/// Outcome of reading one line
enum Line {
    Text(String),
    Eof,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(store: PlaylistStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs until the user picks exit or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "🎵 Rap Music Playlist Manager 🎵")?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.read_int("Choose an option: ")? else {
                log::warn!("input closed, exiting");
                return Ok(());
            };

            let finished = match choice {
                1 => self.create_playlist()?,
                2 => self.add_song()?,
                3 => self.search_songs()?,
                4 => self.remove_song()?,
                5 => self.view_playlists()?,
                6 => self.shuffle_playlist()?,
                EXIT => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice")?;
                    false
                }
            };

            if finished {
                log::warn!("input closed, exiting");
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "\nMain Menu:")?;
        writeln!(self.output, "1. Create playlist")?;
        writeln!(self.output, "2. Add song")?;
        writeln!(self.output, "3. Search songs")?;
        writeln!(self.output, "4. Remove song")?;
        writeln!(self.output, "5. View playlists")?;
        writeln!(self.output, "6. Shuffle playlist")?;
        writeln!(self.output, "7. Exit")?;
        Ok(())
    }

    // Each action returns `true` when input ended mid-dialogue.

    fn create_playlist(&mut self) -> anyhow::Result<bool> {
        let Line::Text(name) = self.read_line("Enter playlist name: ")? else {
            return Ok(true);
        };
        match self.store.create_playlist(&name) {
            Ok(()) => writeln!(self.output, "Playlist created: {name}")?,
            Err(e) => self.report(&e)?,
        }
        Ok(false)
    }

    fn add_song(&mut self) -> anyhow::Result<bool> {
        if self.store.is_empty() {
            self.report(&StoreError::NoPlaylists)?;
            return Ok(false);
        }

        let Line::Text(playlist) = self.read_line("Enter playlist name: ")? else {
            return Ok(true);
        };
        if self.store.get(&playlist).is_none() {
            self.report(&StoreError::PlaylistNotFound(playlist))?;
            return Ok(false);
        }

        writeln!(self.output, "\nPopular Artists:")?;
        for artist in POPULAR_ARTISTS {
            writeln!(self.output, "- {artist}")?;
        }

        let Line::Text(artist) = self.read_line("\nArtist: ")? else {
            return Ok(true);
        };
        let Line::Text(title) = self.read_line("Title: ")? else {
            return Ok(true);
        };
        let Line::Text(album) = self.read_line("Album: ")? else {
            return Ok(true);
        };
        let Line::Text(genre) = self.read_line("Genre: ")? else {
            return Ok(true);
        };

        let song = Song::new(title, artist, album, genre);
        match self.store.add_song(&playlist, song) {
            Ok(()) => writeln!(self.output, "Song added!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(false)
    }

    fn search_songs(&mut self) -> anyhow::Result<bool> {
        writeln!(self.output, "\nSearch by:")?;
        writeln!(self.output, "1. Title")?;
        writeln!(self.output, "2. Artist")?;
        writeln!(self.output, "3. Genre")?;

        let Some(code) = self.read_int("Your choice: ")? else {
            return Ok(true);
        };
        let Line::Text(term) = self.read_line("Search term: ")? else {
            return Ok(true);
        };

        for hit in self.store.search_songs(search_field(code), &term) {
            writeln!(self.output, "\nFound in {}:", hit.playlist)?;
            for song in &hit.songs {
                writeln!(self.output, "{song}")?;
            }
        }
        Ok(false)
    }

    fn remove_song(&mut self) -> anyhow::Result<bool> {
        let Line::Text(playlist) = self.read_line("Enter playlist name: ")? else {
            return Ok(true);
        };
        if self.store.get(&playlist).is_none() {
            self.report(&StoreError::PlaylistNotFound(playlist))?;
            return Ok(false);
        }

        let Line::Text(title) = self.read_line("Enter song title to remove: ")? else {
            return Ok(true);
        };
        match self.store.remove_song(&playlist, &title) {
            Ok(()) => writeln!(self.output, "Song removed successfully")?,
            Err(e) => self.report(&e)?,
        }
        Ok(false)
    }

    fn view_playlists(&mut self) -> anyhow::Result<bool> {
        if self.store.is_empty() {
            writeln!(self.output, "No playlists yet!")?;
            return Ok(false);
        }

        writeln!(self.output, "\nYour Playlists:")?;
        for playlist in self.store.playlists() {
            writeln!(self.output, "{playlist}")?;
            for song in playlist.songs() {
                writeln!(self.output, "  {song}")?;
            }
        }
        Ok(false)
    }

    fn shuffle_playlist(&mut self) -> anyhow::Result<bool> {
        let Line::Text(playlist) = self.read_line("Enter playlist name to shuffle: ")? else {
            return Ok(true);
        };
        match self.store.shuffle_playlist(&playlist) {
            Ok(()) => writeln!(self.output, "Playlist shuffled!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(false)
    }

    fn report(&mut self, err: &StoreError) -> anyhow::Result<()> {
        let msg = match err {
            StoreError::AlreadyExists(_) => "Playlist already exists!",
            StoreError::NoPlaylists => "No playlists exist yet!",
            StoreError::PlaylistNotFound(_) => "Playlist not found!",
            StoreError::SongNotFound { .. } => "Song not found in playlist",
        };
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Prompts and reads one raw line, only the line terminator is stripped.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Line> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from console")?;
        if read == 0 {
            return Ok(Line::Eof);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // invalid bytes become U+FFFD instead of ending the session
        Ok(Line::Text(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Prompts until the line parses as an integer. `None` on end of input.
    fn read_int(&mut self, prompt: &str) -> anyhow::Result<Option<i32>> {
        loop {
            let Line::Text(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<i32>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Please enter a valid number")?,
            }
        }
    }
}

/// Maps the search menu code (1 title, 2 artist, 3 genre) to a field.
fn search_field(code: i32) -> SearchField {
    match code {
        1 => SearchField::ByTitle,
        2 => SearchField::ByArtist,
        3 => SearchField::ByGenre,
        _ => SearchField::Invalid,
    }
}
