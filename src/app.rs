use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/session", get(handlers::get_session))
        .route("/api/session/date", put(handlers::set_date))
        .route("/api/attendees", post(handlers::add_attendee))
        .route("/api/attendees/clear", post(handlers::clear_attendees))
        .route("/api/attendees/:index", delete(handlers::remove_attendee))
        .route("/api/attendees/:index/toggle", post(handlers::toggle_attendee))
        .route("/api/offerings", post(handlers::add_offering))
        .route("/api/offerings/clear", post(handlers::clear_offerings))
        .route("/api/offerings/:index", delete(handlers::remove_offering))
        .route("/api/history", get(handlers::get_history))
        .route("/api/history/credential", put(handlers::set_credential))
        .route("/api/history/clear", post(handlers::clear_history))
        .route("/api/history/names/:name", delete(handlers::delete_history_name))
        .route("/api/report", get(handlers::get_report))
        .with_state(state)
}
