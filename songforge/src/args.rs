use std::path::PathBuf;

use clap::Parser;

/// Songforge music generation gateway
#[derive(Debug, Parser)]
#[command(name = "songforge", about = "Lyrics-to-music generation gateway")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "songforge.toml", env = "SONGFORGE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "SONGFORGE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
