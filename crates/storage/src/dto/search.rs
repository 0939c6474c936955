use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the name search endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Partial name; accents, case and punctuation are ignored.
    #[serde(default)]
    pub q: String,
}
