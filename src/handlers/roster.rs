use std::collections::HashMap;

use axum::{
    extract::{Form, State},
    response::{Html, Redirect, Response},
};

use super::{read_session, update_session, with_session};
use crate::{
    controller::{self, RosterEvent},
    error::{AppError, Result},
    models::form::{GenerateForm, parse_cell_fields},
    render::{render_page, render_snapshot},
    session::SessionCookie,
    state::AppState,
};

/// Interactive page: form, per-cell editor, grid and embedded snapshot.
/// A pending Generate error is shown once and then cleared.
pub async fn index(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
) -> Response {
    let id = state.sessions.resolve(cookie).await;
    let page = update_session(&state, id, |session| {
        let html = render_page(session);
        session.error = None;
        Ok(Html(html))
    })
    .await;

    with_session(id, page)
}

/// Generate action. Failures are kept in the session and shown on the page.
pub async fn generate(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
    Form(form): Form<GenerateForm>,
) -> Response {
    let id = state.sessions.resolve(cookie).await;
    let event = RosterEvent::Generate(form.into_request());

    let result = update_session(&state, id, |session| controller::dispatch(session, event)).await;
    with_session(id, result.map(|_| Redirect::to("/")))
}

/// Editor submit: every shift selector and remark input of the page
pub async fn update_cells(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let id = state.sessions.resolve(cookie).await;

    let result: Result<Redirect> = async {
        let fields = parse_cell_fields(&fields)?;
        let applied =
            update_session(&state, id, |session| controller::submit_cells(session, fields)).await?;
        tracing::debug!("Applied {} cell edits to session {}", applied, id);
        Ok(Redirect::to("/"))
    }
    .await;

    with_session(id, result)
}

/// Printable snapshot document of the current table
pub async fn snapshot(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
) -> Response {
    let id = state.sessions.resolve(cookie).await;

    let result: Result<Html<String>> = async {
        let html = read_session(&state, id, |session| {
            session.table.as_ref().map(render_snapshot)
        })
        .await?
        .ok_or(AppError::NoTable)?;
        Ok(Html(html))
    }
    .await;

    with_session(id, result)
}
