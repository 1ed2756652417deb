//! HTTP surface: the static client bundle at `/` and the socket at `/ws`.

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::table::Table;
use crate::ws;

#[derive(Clone)]
pub struct AppState {
    pub table: Arc<Table>,
}

impl AppState {
    pub fn new(table: Table) -> Self { Self { table: Arc::new(table) } }
}

/// Everything that is not `/ws` is looked up in `static_dir`; `/` serves its
/// `index.html`.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/ws", get(ws::connection::ws_handler))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
