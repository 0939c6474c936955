use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Team occupancy counts over participant records only (support staff are
/// excluded from every figure).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SummaryCounts {
    #[serde(rename = "LARANJA")]
    pub orange: usize,
    #[serde(rename = "VERDE")]
    pub green: usize,
    #[serde(rename = "VERMELHO")]
    pub red: usize,
    #[serde(rename = "SEM_EQUIPE")]
    pub unassigned: usize,
    #[serde(rename = "TOTAL")]
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub summary: SummaryCounts,
}
