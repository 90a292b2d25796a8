mod error;
mod routes;

pub use error::{ApiError, ErrorDetails, ErrorResponse};

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use blockify_blockifier::{Blockifier, BlobStore, Transcriber};

pub struct AppState<S, T> {
    blockifier: Arc<Blockifier<S, T>>,
}

impl<S, T> Clone for AppState<S, T> {
    fn clone(&self) -> Self {
        Self {
            blockifier: self.blockifier.clone(),
        }
    }
}

impl<S, T> AppState<S, T> {
    pub fn new(blockifier: Blockifier<S, T>) -> Self {
        Self {
            blockifier: Arc::new(blockifier),
        }
    }
}

pub fn router<S, T>(state: AppState<S, T>) -> Router
where
    S: BlobStore + 'static,
    T: Transcriber + 'static,
{
    Router::new()
        .route("/v1/blockify", post(routes::blockify::<S, T>))
        .route("/v1/jobs/{id}", get(routes::job::<S, T>))
        .with_state(state)
}
