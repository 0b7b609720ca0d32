use crate::infrastructure::state::AppState;
use crate::presentation::handlers::registrations;
use axum::{
    Router,
    routing::{get, post},
};

/// Registration routes - public intake plus admin CRUD
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(registrations::create_registration).get(registrations::list_registrations),
        )
        .route(
            "/{id}",
            get(registrations::get_registration)
                .put(registrations::update_registration)
                .delete(registrations::delete_registration),
        )
}
