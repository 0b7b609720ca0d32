use crate::infrastructure::state::AppState;
use crate::presentation::handlers::users;
use axum::{
    Router,
    routing::{post, put},
};

/// User routes - dashboard account management
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create_user).get(users::list_users))
        .route("/{id}", put(users::update_user).delete(users::delete_user))
}
