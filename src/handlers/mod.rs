pub mod api;
pub mod roster;

use axum::{
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    session::{Session, set_cookie_value},
    state::AppState,
};

/// Attach the session cookie to a response, error responses included
fn with_session(id: Uuid, response: impl IntoResponse) -> Response {
    ([(SET_COOKIE, set_cookie_value(id))], response).into_response()
}

fn session_gone(id: Uuid) -> AppError {
    AppError::Internal(format!("session {id} disappeared during the request"))
}

/// Read the session, failing if it vanished after `resolve`
async fn read_session<R>(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&Session) -> R,
) -> Result<R> {
    state
        .sessions
        .read(id, f)
        .await
        .ok_or_else(|| session_gone(id))
}

/// Run a fallible action against the session under its write lock
async fn update_session<R>(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut Session) -> Result<R>,
) -> Result<R> {
    state
        .sessions
        .update(id, f)
        .await
        .ok_or_else(|| session_gone(id))?
}

/// Liveness probe
pub async fn health() -> &'static str {
    "Shift roster server is running."
}
