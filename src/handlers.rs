use crate::errors::{AppError, ListError};
use crate::history::HistoryCommand;
use crate::locale::LocaleFormat;
use crate::models::{
    AddAttendeeRequest, AddOfferingRequest, ClearResponse, ConfirmRequest, CredentialRequest,
    HistoryQuery, HistoryResponse, OfferingView, ReportResponse, SessionDateRequest, SessionResponse,
};
use crate::report::REPORT_FILENAME;
use crate::session::Session;
use crate::state::AppState;
use crate::summary::build_summary;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::{debug, info, warn};

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(snapshot(&session, state.locale.as_ref()))
}

pub async fn set_date(
    State(state): State<AppState>,
    Json(payload): Json<SessionDateRequest>,
) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    session.set_date(payload.date);
    Json(snapshot(&session, state.locale.as_ref()))
}

pub async fn add_attendee(
    State(state): State<AppState>,
    Json(payload): Json<AddAttendeeRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut session = state.session.lock().await;
    if let Some(name) = session.add_attendee(&payload.name).map_err(reject)? {
        state.history_queue.submit(HistoryCommand::Append(name));
    }
    Ok(Json(snapshot(&session, state.locale.as_ref())))
}

pub async fn toggle_attendee(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut session = state.session.lock().await;
    session.toggle_attendee(index).map_err(reject)?;
    Ok(Json(snapshot(&session, state.locale.as_ref())))
}

pub async fn remove_attendee(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut session = state.session.lock().await;
    session.remove_attendee(index).map_err(reject)?;
    Ok(Json(snapshot(&session, state.locale.as_ref())))
}

pub async fn clear_attendees(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmRequest>,
) -> Json<ClearResponse> {
    let cleared = state
        .session
        .lock()
        .await
        .clear_attendees(|_| payload.confirm);
    if cleared {
        info!("attendee list cleared");
    }
    Json(ClearResponse { cleared })
}

pub async fn add_offering(
    State(state): State<AppState>,
    Json(payload): Json<AddOfferingRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut session = state.session.lock().await;
    session
        .add_offering(&payload.description, &payload.amount)
        .map_err(reject)?;
    Ok(Json(snapshot(&session, state.locale.as_ref())))
}

pub async fn remove_offering(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut session = state.session.lock().await;
    session.remove_offering(index).map_err(reject)?;
    Ok(Json(snapshot(&session, state.locale.as_ref())))
}

pub async fn clear_offerings(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmRequest>,
) -> Json<ClearResponse> {
    let cleared = state
        .session
        .lock()
        .await
        .clear_offerings(|_| payload.confirm);
    if cleared {
        info!("offering list cleared");
    }
    Json(ClearResponse { cleared })
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        status: state.history.status().await,
        names: state.history.filter(&query.q).await,
    })
}

pub async fn set_credential(
    State(state): State<AppState>,
    Json(payload): Json<CredentialRequest>,
) -> Result<StatusCode, AppError> {
    let token = payload.token.trim();
    if token.is_empty() {
        return Err(AppError::bad_request("token must not be empty"));
    }
    state.history.set_credential(token).await;
    state.history_queue.submit(HistoryCommand::Load);
    Ok(StatusCode::ACCEPTED)
}

pub async fn delete_history_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> StatusCode {
    state.history_queue.submit(HistoryCommand::Delete(name));
    StatusCode::ACCEPTED
}

pub async fn clear_history(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmRequest>,
) -> Json<ClearResponse> {
    Json(ClearResponse {
        cleared: state.history_queue.clear_all(|_| payload.confirm),
    })
}

pub async fn get_report(State(state): State<AppState>) -> Result<Json<ReportResponse>, AppError> {
    let session = state.session.lock().await;
    let report = session.report(state.locale.as_ref())?;
    Ok(Json(ReportResponse {
        filename: REPORT_FILENAME,
        report,
    }))
}

fn snapshot(session: &Session, locale: &dyn LocaleFormat) -> SessionResponse {
    SessionResponse {
        date: session.date,
        attendees: session.attendees.entries().to_vec(),
        offerings: session
            .offerings
            .entries()
            .iter()
            .map(|o| OfferingView {
                description: o.description.clone(),
                amount: o.amount,
                amount_label: locale.currency(o.amount),
            })
            .collect(),
        summary: build_summary(session, locale),
    }
}

fn reject(err: ListError) -> AppError {
    match &err {
        ListError::OutOfBounds { .. } => warn!(error = %err, "index out of range"),
        _ => debug!(error = %err, "input rejected"),
    }
    err.into()
}
