pub mod playlist;
pub mod song;

/// Shown as a hint while entering a song; never used to validate input.
pub const POPULAR_ARTISTS: [&str; 8] = [
    "Kendrick Lamar",
    "Drake",
    "Beyoncé",
    "J. Cole",
    "Travis Scott",
    "Nicki Minaj",
    "Lil Wayne",
    "Jay-Z",
];
