use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One imported row. Spreadsheet exports disagree on the column name, so the
/// historical aliases are accepted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportItem {
    #[serde(default, rename = "nomeCompleto", alias = "nome", alias = "Nome")]
    pub full_name: Option<String>,
}

/// Body of the support-staff import endpoint: either a bare array or an
/// object wrapping it under `items`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ImportPayload {
    Items(Vec<ImportItem>),
    Wrapped { items: Vec<ImportItem> },
}

impl ImportPayload {
    pub fn into_items(self) -> Vec<ImportItem> {
        match self {
            ImportPayload::Items(items) => items,
            ImportPayload::Wrapped { items } => items,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImportResponse {
    pub message: String,
    #[serde(rename = "adicionados")]
    pub added: usize,
    #[serde(rename = "ignorados")]
    pub skipped: usize,
    pub total: usize,
}

/// Optional body of the reset endpoint; missing body or field means "TODOS".
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ResetRequest {
    #[serde(default)]
    pub tipo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResetResponse {
    pub message: String,
    pub tipo: String,
    #[serde(rename = "afetados")]
    pub affected: usize,
    pub total: usize,
}
