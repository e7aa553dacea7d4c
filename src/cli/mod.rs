use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::config::Config;
use crate::menu::Menu;
use crate::store::operations::PlaylistStore;

#[derive(Parser)]
#[command(name = "playdeck")]
#[command(version = "0.1")]
#[command(about = "Interactive playlist manager")]
pub struct Cli {
    /// Path to an optional config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for playlist shuffling, overrides the config file
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Cli {
    fn shuffle_seed(&self) -> anyhow::Result<Option<u64>> {
        let cfg = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(self.seed.or(cfg.shuffle.seed))
    }
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();

    let store = match cli.shuffle_seed()? {
        Some(seed) => {
            log::info!("shuffling with fixed seed {seed}");
            PlaylistStore::with_seed(seed)
        }
        None => PlaylistStore::new(),
    };

    let stdin = io::stdin();
    let mut menu = Menu::new(store, stdin.lock(), io::stdout());
    menu.run()
}
