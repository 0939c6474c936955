use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::normalize::normalize_name;

/// One of the three fixed event teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum Team {
    #[serde(rename = "LARANJA")]
    Orange,
    #[serde(rename = "VERDE")]
    Green,
    #[serde(rename = "VERMELHO")]
    Red,
}

impl Team {
    pub const ALL: [Team; 3] = [Team::Orange, Team::Green, Team::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Orange => "LARANJA",
            Team::Green => "VERDE",
            Team::Red => "VERMELHO",
        }
    }
}

impl FromStr for Team {
    type Err = ();

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "LARANJA" => Ok(Team::Orange),
            "VERDE" => Ok(Team::Green),
            "VERMELHO" => Ok(Team::Red),
            _ => Err(()),
        }
    }
}

/// Whether a registrant is a regular attendee or event support staff.
/// Support staff check in like everyone else but never join a team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RegistrantKind {
    #[default]
    #[serde(rename = "PARTICIPANTE")]
    Participant,
    #[serde(rename = "APOIO")]
    Support,
}

impl RegistrantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrantKind::Participant => "PARTICIPANTE",
            RegistrantKind::Support => "APOIO",
        }
    }
}

/// A registered person. The serialized field names are the persisted wire
/// names; data files written by earlier deployments read back unchanged, and
/// fields this version does not know about ride along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registrant {
    pub id: String,
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,
    #[serde(rename = "nomeNormalizado")]
    pub normalized_name: String,
    #[serde(default, rename = "tipo")]
    pub kind: RegistrantKind,
    #[serde(default, rename = "equipe")]
    pub team: Option<Team>,
    #[serde(default, rename = "checkinRealizado")]
    pub checked_in: bool,
    #[serde(default, rename = "checkinEm")]
    pub checked_in_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Registrant {
    /// Builds a fresh pending record from a display name, deriving the
    /// normalized form.
    pub fn from_name(
        full_name: impl Into<String>,
        id: impl Into<String>,
        kind: RegistrantKind,
    ) -> Self {
        let full_name = full_name.into();
        let normalized_name = normalize_name(&full_name);
        Self {
            id: id.into(),
            full_name,
            normalized_name,
            kind,
            team: None,
            checked_in: false,
            checked_in_at: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn is_support(&self) -> bool {
        self.kind == RegistrantKind::Support
    }

    pub fn is_participant(&self) -> bool {
        self.kind == RegistrantKind::Participant
    }

    /// Returns the record to the pending state: not checked in, no team.
    pub fn clear_check_in(&mut self) {
        self.checked_in = false;
        self.checked_in_at = None;
        self.team = None;
    }

    /// True when the record carries any check-in state worth clearing.
    pub fn has_check_in_state(&self) -> bool {
        self.checked_in || self.checked_in_at.is_some() || self.team.is_some()
    }
}
