use axum::{
    Router,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Build the application router with request tracing
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::roster::index))
        .route("/roster/generate", post(handlers::roster::generate))
        .route("/roster/cells", post(handlers::roster::update_cells))
        .route("/roster/snapshot", get(handlers::roster::snapshot))
        .route("/api/roster", get(handlers::api::get_roster))
        .route("/api/roster/cells", put(handlers::api::put_shift))
        .route("/api/roster/remarks", put(handlers::api::put_remark))
        .route("/api/shift-codes", get(handlers::api::get_shift_codes))
        .route("/health", get(handlers::health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
