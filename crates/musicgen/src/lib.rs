#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
pub mod prompt;
pub mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

pub use error::{MusicGenError, Result};
pub use server::{MusicGenServerBuilder, SeedSource, Server};
pub use types::{GenerationData, GenerationEnvelope, GenerationRequest, GenerationStatus};

/// Build the music generation server from configuration
pub fn build_server(config: &songforge_config::Config) -> Arc<Server> {
    Arc::new(MusicGenServerBuilder::new(config).build())
}

/// Create the endpoint router for music generation
///
/// `POST` generates, `GET` is explicitly rejected, and a bare `OPTIONS`
/// (a preflight carrying CORS request headers is answered by the CORS
/// layer before reaching this handler) returns an empty body.
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route(
        "/generate-music",
        post(generate).get(method_not_allowed).options(preflight),
    )
}

/// Handle music generation requests
///
/// Body extraction failures (malformed JSON, wrong content type) are
/// folded into the failure envelope like every other endpoint error.
async fn generate(
    State(server): State<Arc<Server>>,
    request: std::result::Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationEnvelope>> {
    let Json(request) = request.map_err(|rejection| MusicGenError::InvalidRequest(rejection.body_text()))?;

    tracing::debug!(style = %request.style, tempo = %request.tempo, mood = %request.mood, "generation handler called");

    let data = server.generate(request).await?;

    tracing::debug!(id = %data.id, "music generation complete");

    Ok(Json(GenerationEnvelope::success(data)))
}

/// `GET /generate-music` is not supported
async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(GenerationEnvelope::failure("Method not allowed".to_string())),
    )
}

/// Empty success body for non-preflight `OPTIONS` probes
async fn preflight() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}
