use crate::infrastructure::state::AppState;
use crate::presentation::handlers::address;
use axum::{Router, routing::get};

/// Cascading address lookups; each level is keyed by its parent's code.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/regions", get(address::list_regions))
        .route("/provinces/{region}", get(address::list_provinces))
        .route("/cities/{province}", get(address::list_cities))
        .route("/barangays/{city}", get(address::list_barangays))
}
