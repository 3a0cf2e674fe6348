use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Public claim statistics. Only the cap is real (it comes from
/// configuration); the rest is fixed-shape stub content.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_tokens: u64,
    pub claimed_tokens: u64,
    pub remaining_tokens: u64,
    pub total_claims: u64,
}

/// One row of the mocked claims list served to the admin back office.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    pub id: u64,
    pub wallet: String,
    pub amount: u64,
    pub status: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsResponse {
    pub claims: Vec<ClaimRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub wallet: Option<String>,
    #[serde(rename = "ref")]
    pub referral: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub success: bool,
    pub tx_hash: String,
    /// Whether a structurally valid referral code accompanied the claim
    /// and was recorded for attribution.
    pub referral_attributed: bool,
}
