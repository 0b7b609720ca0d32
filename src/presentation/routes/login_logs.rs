use crate::infrastructure::state::AppState;
use crate::presentation::handlers::login_logs;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(login_logs::list_login_logs))
}
