use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::{
    RosterStore,
    dto::admin::{ImportItem, ImportPayload, ImportResponse, ResetRequest, ResetResponse},
    models::RegistrantKind,
    services::reset::ResetScope,
};

use crate::error::ApiError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/admin/import",
    request_body = Vec<ImportItem>,
    security(
        ("admin_secret" = [])
    ),
    responses(
        (status = 200, description = "Batch imported", body = ImportResponse),
        (status = 400, description = "Body is not a JSON array"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn import_registrants(
    State(store): State<RosterStore>,
    payload: Result<Json<Vec<ImportItem>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Ok(Json(items)) = payload else {
        return Err(ApiError::BadRequest(
            r#"Envie um JSON no formato: [{"nomeCompleto":"Fulano"}, {"nomeCompleto":"Ciclano"}]"#
                .to_string(),
        ));
    };

    let (outcome, total) =
        services::import_batch(&store, items, RegistrantKind::Participant).await?;

    Ok(Json(ImportResponse {
        message: format!("Importação concluída: {} registro(s).", outcome.added),
        added: outcome.added,
        skipped: outcome.skipped,
        total,
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/import-apoio",
    request_body = ImportPayload,
    security(
        ("admin_secret" = [])
    ),
    responses(
        (status = 200, description = "Support batch imported", body = ImportResponse),
        (status = 400, description = "Body is not a JSON array"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn import_support(
    State(store): State<RosterStore>,
    payload: Result<Json<ImportPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Ok(Json(payload)) = payload else {
        return Err(ApiError::BadRequest("Envie um array JSON.".to_string()));
    };

    let items = payload.into_items();
    let (outcome, total) = services::import_batch(&store, items, RegistrantKind::Support).await?;

    Ok(Json(ImportResponse {
        message: format!("Importação de APOIO concluída: {} registro(s).", outcome.added),
        added: outcome.added,
        skipped: outcome.skipped,
        total,
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/reset",
    request_body = ResetRequest,
    security(
        ("admin_secret" = [])
    ),
    responses(
        (status = 200, description = "Check-in state cleared", body = ResetResponse),
        (status = 400, description = "Unknown tipo value"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn reset_roster(
    State(store): State<RosterStore>,
    body: Option<Json<ResetRequest>>,
) -> Result<Response, ApiError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let scope = request
        .tipo
        .as_deref()
        .unwrap_or("TODOS")
        .parse::<ResetScope>()
        .map_err(|()| {
            ApiError::BadRequest("Tipo inválido. Use TODOS, PARTICIPANTE ou APOIO.".to_string())
        })?;

    let outcome = services::reset_roster(&store, scope).await?;

    Ok(Json(ResetResponse {
        message: "Reset concluído.".to_string(),
        tipo: scope.as_str().to_string(),
        affected: outcome.affected,
        total: outcome.total,
    })
    .into_response())
}
