use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::Response,
};
use serde::Serialize;

use super::{read_session, update_session, with_session};
use crate::{
    controller::{self, RosterEvent},
    error::Result,
    models::form::{RemarkUpdate, ShiftUpdate},
    roster::{ShiftCode, table::RosterRow},
    session::{RosterState, SessionCookie},
    state::AppState,
};

/// JSON view of a session's roster
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub state: RosterState,
    pub table: Option<TableDto>,
}

#[derive(Debug, Serialize)]
pub struct TableDto {
    pub columns: Vec<String>,
    pub rows: Vec<RosterRow>,
}

/// Get the current roster of the session
pub async fn get_roster(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
) -> Response {
    let id = state.sessions.resolve(cookie).await;
    let response = read_session(&state, id, |session| RosterResponse {
        state: session.state(),
        table: session.table.as_ref().map(|table| TableDto {
            columns: table.column_labels(),
            rows: table.rows().to_vec(),
        }),
    })
    .await;

    with_session(id, response.map(Json))
}

/// Set one employee cell
pub async fn put_shift(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
    Json(request): Json<ShiftUpdate>,
) -> Response {
    let id = state.sessions.resolve(cookie).await;

    let result: Result<StatusCode> = async {
        let code: ShiftCode = request.value.parse()?;
        let event = RosterEvent::SetShift {
            row: request.row,
            slot: request.slot,
            code,
        };
        update_session(&state, id, |session| controller::dispatch(session, event)).await?;
        Ok(StatusCode::NO_CONTENT)
    }
    .await;

    with_session(id, result)
}

/// Set the remark of one row
pub async fn put_remark(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
    Json(request): Json<RemarkUpdate>,
) -> Response {
    let id = state.sessions.resolve(cookie).await;
    let event = RosterEvent::SetRemark {
        row: request.row,
        text: request.remark,
    };

    let result = update_session(&state, id, |session| controller::dispatch(session, event)).await;
    with_session(id, result.map(|_| StatusCode::NO_CONTENT))
}

/// The selectable shift vocabulary
pub async fn get_shift_codes() -> Json<[ShiftCode; 9]> {
    Json(ShiftCode::ALL)
}
