use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Registrant, RegistrantKind, Team};

/// A registrant as returned by the API. Mirrors the persisted record minus
/// any unrecognized passthrough fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrantResponse {
    pub id: String,
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,
    #[serde(rename = "nomeNormalizado")]
    pub normalized_name: String,
    #[serde(rename = "tipo")]
    pub kind: RegistrantKind,
    #[serde(rename = "equipe")]
    pub team: Option<Team>,
    #[serde(rename = "checkinRealizado")]
    pub checked_in: bool,
    #[serde(rename = "checkinEm")]
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl From<&Registrant> for RegistrantResponse {
    fn from(registrant: &Registrant) -> Self {
        Self {
            id: registrant.id.clone(),
            full_name: registrant.full_name.clone(),
            normalized_name: registrant.normalized_name.clone(),
            kind: registrant.kind,
            team: registrant.team,
            checked_in: registrant.checked_in,
            checked_in_at: registrant.checked_in_at,
        }
    }
}

/// Response wrapping a list of registrants (search results, full roster).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrantListResponse {
    pub items: Vec<RegistrantResponse>,
}

/// Response for a check-in attempt: the outcome message plus the record as it
/// now stands.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckInResponse {
    pub message: String,
    pub participante: RegistrantResponse,
}
