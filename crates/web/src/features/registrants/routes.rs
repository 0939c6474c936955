use axum::{
    Router,
    routing::{get, post},
};
use storage::RosterStore;

use super::handlers::{check_in_registrant, get_summary, list_registrants, search_registrants};

pub fn routes() -> Router<RosterStore> {
    Router::new()
        .route("/search", get(search_registrants))
        .route("/list", get(list_registrants))
        .route("/summary", get(get_summary))
        .route("/:id/checkin", post(check_in_registrant))
}
