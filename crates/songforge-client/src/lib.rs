//! Typed client for the Songforge gateway
//!
//! Wraps the `/generate-music` HTTP call for Rust front ends (native
//! shells, wasm bridges, CLI tools). Mirrors the gateway's wire types so
//! the client builds without pulling in the server stack.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod types;

pub use client::SongforgeClient;
pub use error::{ClientError, Result};
pub use types::{GenerationData, GenerationEnvelope, GenerationRequest};
