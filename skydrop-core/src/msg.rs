use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of a token verification. Produced fresh per call; never
/// partially valid.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub is_valid: bool,
}

/// Public view of the distribution cap.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotalTokensResponse {
    pub total_tokens: u64,
}

/// Cap plus the raw shared secret. Trusted contexts only — this type must
/// never be serialized into a response reachable by an end user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfoResponse {
    pub total_tokens: u64,
    pub token: String,
}

/// Referral parameters recovered from a claim link. Either field may be
/// absent; a malformed URL yields both `None`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedReferral {
    pub code: Option<String>,
    pub wallet: Option<String>,
}

/// Referral attribution as read back from the local cache. The three
/// fields live in independent storage slots, so any subset may be absent;
/// a partial record is a valid observation, not corruption.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredReferral {
    pub code: Option<String>,
    pub wallet: Option<String>,
    /// Unix millis at store time.
    pub timestamp: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTokenRequest {
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTokenResponse {
    pub success: bool,
    pub is_valid: bool,
}

/// Uniform error body for every non-2xx boundary response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}
