#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod musicgen;
pub mod server;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use musicgen::*;
pub use server::*;

/// Top-level Songforge configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Music generation configuration
    #[serde(default)]
    pub musicgen: MusicGenConfig,
}
