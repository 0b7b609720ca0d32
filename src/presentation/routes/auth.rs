use crate::infrastructure::state::AppState;
use crate::presentation::handlers::auth;
use axum::{Router, routing::post};

pub fn routes() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}
