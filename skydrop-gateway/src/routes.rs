use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use tracing::{error, info};

use skydrop_core::msg::{
    LoginRequest, LoginResponse, StoredReferral, VerifyTokenRequest, VerifyTokenResponse,
};
use skydrop_core::{referral, session};

use crate::error::ApiError;
use crate::mock;
use crate::msg::{ClaimRequest, ClaimResponse, ClaimsResponse, StatsResponse};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/admin/login", post(admin_login))
        .route("/api/verify-token", post(verify_token))
        .route("/api/stats", get(claim_stats))
        .route("/api/admin/claims", get(admin_claims))
        .route("/api/claim", post(submit_claim))
        .route("/claim", get(claim_landing))
        .with_state(state)
}

/// Decode a JSON body by hand so a malformed payload surfaces as a logged
/// 500, while a well-formed payload with missing fields stays a 400.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| {
        error!(%err, "failed to parse request body");
        ApiError::Internal
    })
}

// ─── Auth ───────────────────────────────────────────────────────────────────

async fn admin_login(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<LoginResponse>, ApiError> {
    let req: LoginRequest = parse_body(&body)?;
    let username = req.username.ok_or(ApiError::MissingField { field: "username" })?;
    let password = req.password.ok_or(ApiError::MissingField { field: "password" })?;
    let token = req.token.ok_or(ApiError::MissingField { field: "token" })?;

    if !session::check_admin_login(&state.config, &state.verifier, &username, &password, &token) {
        return Err(ApiError::Unauthorized);
    }

    info!(%username, "admin login accepted");
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
    }))
}

async fn verify_token(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<VerifyTokenResponse>, ApiError> {
    let req: VerifyTokenRequest = parse_body(&body)?;
    let token = req.token.ok_or(ApiError::MissingField { field: "token" })?;

    Ok(Json(VerifyTokenResponse {
        success: true,
        is_valid: state.verifier.verify(&token).is_valid,
    }))
}

// ─── Claim flow ─────────────────────────────────────────────────────────────

async fn claim_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(mock::stats(state.config.total_tokens()))
}

async fn submit_claim(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ClaimResponse>, ApiError> {
    let req: ClaimRequest = parse_body(&body)?;
    let wallet = req.wallet.ok_or(ApiError::MissingField { field: "wallet" })?;

    // A structurally valid code is recorded as-is; there is no registry
    // to confirm it was ever issued.
    let referral_attributed = match req.referral {
        Some(code) if referral::is_valid_code(&code) => {
            state.referrals.store(&code, &wallet);
            true
        }
        _ => false,
    };

    let tx_hash = state.tx_hashes.next();
    info!(%wallet, referral_attributed, "mock claim submitted");
    Ok(Json(ClaimResponse {
        success: true,
        tx_hash,
        referral_attributed,
    }))
}

/// Referral landing: parse the visited link, record a valid attribution,
/// and echo the stored snapshot. Unparsable or partial links degrade to a
/// no-op read — never an error.
async fn claim_landing(State(state): State<AppState>, uri: Uri) -> Json<StoredReferral> {
    let base = state
        .config
        .public_base_url()
        .unwrap_or(referral::FALLBACK_ORIGIN);
    let link = format!("{}{}", base.trim_end_matches('/'), uri);
    let info = referral::extract_info(&link);
    if let (Some(code), Some(wallet)) = (&info.code, &info.wallet) {
        if referral::is_valid_code(code) {
            state.referrals.store(code, wallet);
        }
    }
    Json(state.referrals.get_stored())
}

// ─── Admin back office ──────────────────────────────────────────────────────

async fn admin_claims(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ClaimsResponse>, ApiError> {
    let header = headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok());
    if !state.verifier.authorize_bearer(header).is_valid {
        return Err(ApiError::Unauthorized);
    }
    Ok(Json(ClaimsResponse {
        claims: mock::claims(),
    }))
}
