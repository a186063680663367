//! HTTP-level tests for login and the bearer-token guard.
//!
//! None of these reach the database: login is checked against the configured
//! credential, and guarded routes reject before any query runs.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    body_json, build_app_without_db, delete, delete_auth, login_token, post_json,
    post_json_auth, post_json_with_header, put_json, put_json_auth, TEST_PASSWORD, TEST_SECRET,
    TEST_USERNAME,
};
use repositori_api::auth::jwt::{generate_access_token_at, validate_token, JwtConfig};

fn test_jwt() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry_mins: 30,
    }
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login_success_returns_bearer_token() {
    let app = build_app_without_db();
    let body = serde_json::json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["token_type"], "bearer");
    assert_eq!(json["expires_in"], 30 * 60);

    let token = json["access_token"].as_str().expect("access_token must be a string");
    let claims = validate_token(token, &test_jwt()).expect("issued token must verify");
    assert_eq!(claims.sub, TEST_USERNAME);
}

#[tokio::test]
async fn test_login_wrong_password_returns_401() {
    let app = build_app_without_db();
    let body = serde_json::json!({ "username": TEST_USERNAME, "password": "wrong" });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_unknown_user_returns_401() {
    let app = build_app_without_db();
    let body = serde_json::json!({ "username": "ghost", "password": TEST_PASSWORD });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_missing_field_is_rejected() {
    let app = build_app_without_db();
    let body = serde_json::json!({ "username": TEST_USERNAME });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Guard on mutating routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_mutations_without_token_return_401() {
    let app = build_app_without_db();
    let prodi = serde_json::json!({ "kode_prodi": "TI", "nama_prodi": "Teknik Informatika" });

    let responses = [
        post_json(app.clone(), "/data-prodi", prodi.clone()).await,
        put_json(app.clone(), "/data-prodi/1", prodi).await,
        delete(app.clone(), "/data-prodi/1").await,
        post_json(
            app.clone(),
            "/data-dosen",
            serde_json::json!({ "nip": "1", "nama_lengkap": "A", "prodi_id": 1 }),
        )
        .await,
        put_json(
            app.clone(),
            "/data-dosen/1",
            serde_json::json!({ "nip": "1", "nama_lengkap": "B", "prodi_id": 1 }),
        )
        .await,
        delete(app.clone(), "/data-dosen/1").await,
        post_json(
            app.clone(),
            "/data-dokumen",
            serde_json::json!({
                "nip": "1", "type_dokumen": "SK", "nama_dokumen": "x", "nama_file": "x.pdf"
            }),
        )
        .await,
        put_json(
            app.clone(),
            "/data-dokumen/1",
            serde_json::json!({
                "nip": "1", "type_dokumen": "SK", "nama_dokumen": "y", "nama_file": "y.pdf"
            }),
        )
        .await,
        delete(app, "/data-dokumen/1").await,
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get("www-authenticate").unwrap(),
            "Bearer"
        );
        assert_eq!(body_json(response).await["code"], "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn test_garbage_token_returns_401() {
    let app = build_app_without_db();
    let response = delete_auth(app, "/data-prodi/1", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_scheme_returns_401() {
    let app = build_app_without_db();
    let token = login_token(app.clone()).await;

    let response = post_json_with_header(
        app,
        "/data-prodi",
        &format!("Token {token}"),
        serde_json::json!({ "kode_prodi": "TI", "nama_prodi": "TI" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_from_other_secret_returns_401() {
    let app = build_app_without_db();
    let foreign = JwtConfig {
        secret: "some-other-secret".to_string(),
        access_token_expiry_mins: 30,
    };
    let token = generate_access_token_at(TEST_USERNAME, &foreign, Utc::now()).unwrap();

    let response = delete_auth(app, "/data-dokumen/1", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_and_forged_tokens_look_the_same() {
    let app = build_app_without_db();
    let expired =
        generate_access_token_at(TEST_USERNAME, &test_jwt(), Utc::now() - Duration::minutes(31))
            .unwrap();

    let expired_resp = delete_auth(app.clone(), "/data-dosen/1", &expired).await;
    let forged_resp = delete_auth(app, "/data-dosen/1", "a.b.c").await;

    assert_eq!(expired_resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(forged_resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(expired_resp).await, body_json(forged_resp).await);
}

#[tokio::test]
async fn test_valid_token_passes_the_guard() {
    // With a valid token the guard lets the request through to the JSON
    // extractor, which rejects the malformed body before any query runs.
    let app = build_app_without_db();
    let token = login_token(app.clone()).await;

    let response = post_json_auth(
        app,
        "/data-prodi",
        &token,
        serde_json::json!({ "unexpected": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_incomplete_put_bodies_are_rejected_before_any_query() {
    // PUT replaces the whole row, so every column must be present.
    let app = build_app_without_db();
    let token = login_token(app.clone()).await;

    let cases = [
        ("/data-prodi/1", serde_json::json!({})),
        ("/data-prodi/1", serde_json::json!({ "nama_prodi": "x" })),
        ("/data-dosen/1", serde_json::json!({ "nama_lengkap": "x" })),
        ("/data-dokumen/1", serde_json::json!({ "nama_file": "x.pdf" })),
    ];

    for (uri, body) in cases {
        let response = put_json_auth(app.clone(), uri, &token, body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
}
