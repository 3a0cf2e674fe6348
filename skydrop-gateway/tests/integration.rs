use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use skydrop_core::referral::generate_link_at;
use skydrop_core::ClaimConfig;
use skydrop_gateway::mock::FixedTxHashSource;
use skydrop_gateway::{router, AppState};

const SECRET: &str = "abc123";
const TX_HASH: &str = "0xfixedfixedfixedfixedfixedfixedfixedfixedfixedfixedfixedfixed00";

fn test_state() -> AppState {
    let config = Arc::new(ClaimConfig::new(
        SECRET,
        1_000_000,
        "admin",
        "hunter2",
        Some("https://skydrop.app".to_string()),
    ));
    AppState::with_hash_source(config, Arc::new(FixedTxHashSource(TX_HASH.to_string())))
}

async fn send(state: &AppState, request: Request<Body>) -> Response<Body> {
    router(state.clone()).oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_auth(uri: &str, auth: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, auth)
        .body(Body::empty())
        .unwrap()
}

// ─── Bearer guard ───────────────────────────────────────────────────────────

#[tokio::test]
async fn correct_bearer_token_reaches_protected_resource() {
    let state = test_state();
    let response = send(&state, get_with_auth("/api/admin/claims", "Bearer abc123")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["claims"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn wrong_bearer_token_is_unauthorized() {
    let state = test_state();
    let response = send(&state, get_with_auth("/api/admin/claims", "Bearer wrong")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn header_deviations_are_indistinguishable_401s() {
    let state = test_state();

    let missing = send(&state, get("/api/admin/claims")).await;
    let wrong_scheme = send(&state, get_with_auth("/api/admin/claims", "Token abc123")).await;
    let lowercase_scheme =
        send(&state, get_with_auth("/api/admin/claims", "bearer abc123")).await;
    let bare_token = send(&state, get_with_auth("/api/admin/claims", "abc123")).await;

    for response in [missing, wrong_scheme, lowercase_scheme, bare_token] {
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Unauthorized");
    }
}

// ─── Admin login ────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_succeeds_with_all_three_factors() {
    let state = test_state();
    let response = send(
        &state,
        post_json(
            "/api/admin/login",
            json!({ "username": "admin", "password": "hunter2", "token": SECRET }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn login_failures_never_name_the_failing_factor() {
    let state = test_state();

    let wrong_token = send(
        &state,
        post_json(
            "/api/admin/login",
            json!({ "username": "admin", "password": "hunter2", "token": "wrong" }),
        ),
    )
    .await;
    let wrong_password = send(
        &state,
        post_json(
            "/api/admin/login",
            json!({ "username": "admin", "password": "nope", "token": SECRET }),
        ),
    )
    .await;

    assert_eq!(wrong_token.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    // The bodies must be identical so callers cannot probe factors.
    assert_eq!(body_json(wrong_token).await, body_json(wrong_password).await);
}

#[tokio::test]
async fn login_with_missing_field_is_bad_request() {
    let state = test_state();
    let response = send(
        &state,
        post_json(
            "/api/admin/login",
            json!({ "username": "admin", "password": "hunter2" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "token is required");
}

#[tokio::test]
async fn malformed_json_is_an_internal_error() {
    let state = test_state();
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = send(&state, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
}

// ─── Token verification endpoint ────────────────────────────────────────────

#[tokio::test]
async fn verify_token_reports_validity_without_erroring() {
    let state = test_state();

    let valid = send(
        &state,
        post_json("/api/verify-token", json!({ "token": SECRET })),
    )
    .await;
    assert_eq!(valid.status(), StatusCode::OK);
    let body = body_json(valid).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["isValid"], true);

    let invalid = send(
        &state,
        post_json("/api/verify-token", json!({ "token": "wrong" })),
    )
    .await;
    assert_eq!(invalid.status(), StatusCode::OK);
    let body = body_json(invalid).await;
    assert_eq!(body["isValid"], false);
}

#[tokio::test]
async fn verify_token_without_token_field_is_bad_request() {
    let state = test_state();
    let response = send(&state, post_json("/api/verify-token", json!({}))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "token is required");
}

// ─── Public claim flow ──────────────────────────────────────────────────────

#[tokio::test]
async fn stats_are_public_and_carry_the_configured_cap() {
    let state = test_state();
    let response = send(&state, get("/api/stats")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["totalTokens"], 1_000_000);
    assert_eq!(
        body["claimedTokens"].as_u64().unwrap() + body["remainingTokens"].as_u64().unwrap(),
        1_000_000
    );
}

#[tokio::test]
async fn claim_returns_injected_tx_hash_and_attributes_valid_referrals() {
    let state = test_state();
    let response = send(
        &state,
        post_json(
            "/api/claim",
            json!({ "wallet": "0xWALLET", "ref": "abc1234567" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["txHash"], TX_HASH);
    assert_eq!(body["referralAttributed"], true);

    let stored = state.referrals.get_stored();
    assert_eq!(stored.code.as_deref(), Some("abc1234567"));
    assert_eq!(stored.wallet.as_deref(), Some("0xWALLET"));
}

#[tokio::test]
async fn claim_ignores_structurally_invalid_referrals() {
    let state = test_state();
    let response = send(
        &state,
        post_json("/api/claim", json!({ "wallet": "0xWALLET", "ref": "short" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["referralAttributed"], false);
    assert_eq!(state.referrals.get_stored().code, None);
}

#[tokio::test]
async fn claim_without_wallet_is_bad_request() {
    let state = test_state();
    let response = send(&state, post_json("/api/claim", json!({ "ref": "abc1234567" }))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "wallet is required");
}

// ─── Referral landing ───────────────────────────────────────────────────────

#[tokio::test]
async fn landing_stores_attribution_and_survives_later_requests() {
    let state = test_state();

    let response = send(&state, get("/claim?ref=abc1234567&wallet=0xWALLET")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["code"], "abc1234567");
    assert_eq!(body["wallet"], "0xWALLET");
    assert!(body["timestamp"].is_i64());

    // A later visit without parameters still sees the stored triple.
    let revisit = send(&state, get("/claim")).await;
    let body = body_json(revisit).await;
    assert_eq!(body["code"], "abc1234567");
    assert_eq!(body["wallet"], "0xWALLET");
}

#[tokio::test]
async fn landing_ignores_invalid_codes_and_partial_links() {
    let state = test_state();

    let short_code = send(&state, get("/claim?ref=short&wallet=0xWALLET")).await;
    assert_eq!(short_code.status(), StatusCode::OK);
    let body = body_json(short_code).await;
    assert_eq!(body["code"], Value::Null);

    let missing_wallet = send(&state, get("/claim?ref=abc1234567")).await;
    assert_eq!(missing_wallet.status(), StatusCode::OK);
    let body = body_json(missing_wallet).await;
    assert_eq!(body["code"], Value::Null);
}

#[tokio::test]
async fn generated_link_round_trips_through_the_landing_route() {
    let state = test_state();
    let wallet = "0x1a2b3c4d5e6f";
    let link = generate_link_at(wallet, Some("https://skydrop.app"), 1_755_955_200_000);

    // Strip the origin: the router sees path + query.
    let path_and_query = link.strip_prefix("https://skydrop.app").unwrap();
    let response = send(&state, get(path_and_query)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["wallet"], wallet);
    assert!(body["code"].as_str().unwrap().starts_with("1a2b3c4d"));
}
