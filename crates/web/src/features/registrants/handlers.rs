use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    RosterStore,
    dto::registrant::{CheckInResponse, RegistrantListResponse, RegistrantResponse},
    dto::search::SearchQuery,
    dto::summary::SummaryResponse,
};

use crate::error::ApiError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/participantes/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Registrants matching the query", body = RegistrantListResponse)
    ),
    tag = "participantes"
)]
pub async fn search_registrants(
    State(store): State<RosterStore>,
    Query(params): Query<SearchQuery>,
) -> Result<Response, ApiError> {
    let matches = services::search(&store, &params.q).await?;

    let items = matches.iter().map(RegistrantResponse::from).collect();

    Ok(Json(RegistrantListResponse { items }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participantes/list",
    responses(
        (status = 200, description = "The full roster", body = RegistrantListResponse)
    ),
    tag = "participantes"
)]
pub async fn list_registrants(State(store): State<RosterStore>) -> Result<Response, ApiError> {
    let roster = services::list(&store).await?;

    let items = roster.iter().map(RegistrantResponse::from).collect();

    Ok(Json(RegistrantListResponse { items }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participantes/summary",
    responses(
        (status = 200, description = "Participant counts per team", body = SummaryResponse)
    ),
    tag = "participantes"
)]
pub async fn get_summary(State(store): State<RosterStore>) -> Result<Response, ApiError> {
    let summary = services::summarize(&store).await?;

    Ok(Json(SummaryResponse { summary }).into_response())
}

#[utoipa::path(
    post,
    path = "/api/participantes/{id}/checkin",
    params(
        ("id" = String, Path, description = "Registrant id")
    ),
    responses(
        (status = 200, description = "Check-in confirmed (or already done)", body = CheckInResponse),
        (status = 404, description = "Unknown registrant id"),
        (status = 409, description = "All teams at capacity")
    ),
    tag = "participantes"
)]
pub async fn check_in_registrant(
    State(store): State<RosterStore>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let outcome = services::check_in(&store, &id).await?;

    let message = if outcome.already_checked_in {
        "Check-in já realizado."
    } else {
        "Check-in realizado com sucesso!"
    };

    Ok(Json(CheckInResponse {
        message: message.to_string(),
        participante: RegistrantResponse::from(&outcome.registrant),
    })
    .into_response())
}
