use axum::Router;
use storage::RosterStore;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod middleware;

use middleware::auth::AdminSecret;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::registrants::handlers::search_registrants,
        features::registrants::handlers::list_registrants,
        features::registrants::handlers::get_summary,
        features::registrants::handlers::check_in_registrant,
        features::admin::handlers::import_registrants,
        features::admin::handlers::import_support,
        features::admin::handlers::reset_roster,
    ),
    components(
        schemas(
            storage::dto::registrant::RegistrantResponse,
            storage::dto::registrant::RegistrantListResponse,
            storage::dto::registrant::CheckInResponse,
            storage::dto::summary::SummaryCounts,
            storage::dto::summary::SummaryResponse,
            storage::dto::admin::ImportItem,
            storage::dto::admin::ImportPayload,
            storage::dto::admin::ImportResponse,
            storage::dto::admin::ResetRequest,
            storage::dto::admin::ResetResponse,
            storage::models::Team,
            storage::models::RegistrantKind,
        )
    ),
    tags(
        (name = "participantes", description = "Public check-in endpoints"),
        (name = "admin", description = "Protected roster administration"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_secret",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::new("x-admin-secret"),
                    ),
                ),
            )
        }
    }
}

/// Assembles the application router over the given store. Admin routes sit
/// behind the secret check; everything else is public to the kiosk frontend.
pub fn build_router(store: RosterStore, admin: AdminSecret) -> Router {
    Router::new()
        .nest("/api/participantes", features::registrants::routes::routes())
        .nest("/api/admin", features::admin::routes::routes(admin))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .max_age(std::time::Duration::from_secs(3600)),
        )
        .with_state(store)
}
