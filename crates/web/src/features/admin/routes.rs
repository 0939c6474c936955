use axum::{Router, middleware, routing::post};
use storage::RosterStore;

use super::handlers::{import_registrants, import_support, reset_roster};
use crate::middleware::auth::{AdminSecret, require_admin};

pub fn routes(admin: AdminSecret) -> Router<RosterStore> {
    Router::new()
        .route("/import", post(import_registrants))
        .route("/import-apoio", post(import_support))
        .route("/reset", post(reset_roster))
        .route_layer(middleware::from_fn_with_state(admin, require_admin))
}
