use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::models::{Registrant, RegistrantKind, Team};
use crate::normalize::normalize_name;

/// Loosely-typed registrant row as found in stored payloads. Early payloads
/// wrote numeric ids and omitted most fields, so everything is optional here
/// and unknown fields are carried along untouched.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRegistrant {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default, rename = "nomeCompleto")]
    full_name: Option<String>,
    #[serde(default, rename = "nomeNormalizado")]
    normalized_name: Option<String>,
    #[serde(default, rename = "tipo")]
    kind: Option<String>,
    #[serde(default, rename = "equipe")]
    team: Option<String>,
    #[serde(default, rename = "checkinRealizado")]
    checked_in: Option<bool>,
    #[serde(default, rename = "checkinEm")]
    checked_in_at: Option<Value>,
    #[serde(flatten)]
    extra: serde_json::Map<String, Value>,
}

/// Ids were stored as JSON numbers before the string scheme took over.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Converts one stored row into a canonical registrant. Rows with no id or a
/// blank name cannot be addressed and are dropped with a warning; every other
/// irregularity degrades to a safe default instead of failing the read.
pub(crate) fn migrate_record(raw: RawRegistrant) -> Option<Registrant> {
    let Some(id) = raw.id.map(RawId::into_string) else {
        warn!("Dropping stored registrant without an id");
        return None;
    };
    let full_name = raw
        .full_name
        .map(|name| name.trim().to_string())
        .unwrap_or_default();
    if full_name.is_empty() {
        warn!("Dropping stored registrant {}: blank name", id);
        return None;
    }

    let kind = parse_kind(raw.kind.as_deref(), &id);
    let team = match kind {
        RegistrantKind::Support => None,
        RegistrantKind::Participant => parse_team(raw.team.as_deref(), &id),
    };
    let normalized_name = raw
        .normalized_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| normalize_name(&full_name));

    Some(Registrant {
        id: id.clone(),
        full_name,
        normalized_name,
        kind,
        team,
        checked_in: raw.checked_in.unwrap_or(false),
        checked_in_at: parse_checked_in_at(raw.checked_in_at, &id),
        extra: raw.extra,
    })
}

fn parse_kind(value: Option<&str>, id: &str) -> RegistrantKind {
    let Some(raw) = value else {
        return RegistrantKind::Participant;
    };
    match raw.trim().to_uppercase().as_str() {
        "" | "PARTICIPANTE" => RegistrantKind::Participant,
        "APOIO" => RegistrantKind::Support,
        other => {
            warn!("Registrant {}: unknown tipo {:?}, treating as PARTICIPANTE", id, other);
            RegistrantKind::Participant
        }
    }
}

fn parse_team(value: Option<&str>, id: &str) -> Option<Team> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<Team>() {
        Ok(team) => Some(team),
        Err(()) => {
            warn!("Registrant {}: unknown equipe {:?}, leaving unassigned", id, raw);
            None
        }
    }
}

fn parse_checked_in_at(value: Option<Value>, id: &str) -> Option<DateTime<Utc>> {
    match value? {
        Value::Null => None,
        Value::String(timestamp) => match DateTime::parse_from_rfc3339(&timestamp) {
            Ok(parsed) => Some(parsed.with_timezone(&Utc)),
            Err(_) => {
                warn!("Registrant {}: unparsable checkinEm {:?}, clearing it", id, timestamp);
                None
            }
        },
        other => {
            warn!("Registrant {}: unexpected checkinEm {}, clearing it", id, other);
            None
        }
    }
}
