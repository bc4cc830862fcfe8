//! HTTP API exposing `POST /generate-flashcards`.

mod error;
mod extractors;
mod handlers;
mod middleware;
mod router;
mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, SharedState};

use crate::FlashcardGenerator;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

/// Serve the API on `addr` until `shutdown` resolves.
pub async fn serve<F>(
    addr: SocketAddr,
    generator: FlashcardGenerator,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state: SharedState = Arc::new(AppState { generator });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            log::info!("Shutting down");
        })
        .await
}
