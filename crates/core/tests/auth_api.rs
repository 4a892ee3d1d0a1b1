//! Request shaping and error pass-through of the auth service client.

mod support;

use axum::http::{Method, StatusCode};
use redsocial_core::{ApiError, AuthApi};
use redsocial_shared::{Credentials, RegisterData, User};
use serde_json::json;
use support::{closed_url, MockService};

const AUTH_PREFIX: &str = "/api/auth";

fn credentials() -> Credentials {
    Credentials {
        email: "test@example.com".into(),
        password: "password123".into(),
    }
}

fn register_data() -> RegisterData {
    RegisterData {
        email: "newuser@example.com".into(),
        password: "password123".into(),
        first_name: "New".into(),
        last_name: "User".into(),
        alias: "newuser".into(),
        birth_date: "1995-05-15".into(),
        extra: Default::default(),
    }
}

fn login_body() -> serde_json::Value {
    json!({
        "token": "fake-jwt-token",
        "user": {
            "id": "1",
            "email": "test@example.com",
            "first_name": "Test",
            "last_name": "User",
            "alias": "testuser",
            "birth_date": "1990-01-01"
        }
    })
}

#[tokio::test]
async fn login_posts_credentials_once() {
    let service = MockService::ok(login_body().to_string()).await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    api.login(&credentials()).await.unwrap();

    let req = service.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/api/auth/login");
    assert_eq!(req.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        req.body,
        json!({ "email": "test@example.com", "password": "password123" })
    );
    assert_eq!(req.authorization, None);
}

#[tokio::test]
async fn login_returns_the_body_as_sent() {
    let service = MockService::ok(login_body().to_string()).await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    let res = api.login(&credentials()).await.unwrap();

    assert_eq!(res.as_value(), &login_body());
    assert_eq!(res.token().as_deref(), Some("fake-jwt-token"));
    assert_eq!(
        res.user().map(|u: User| u.email).as_deref(),
        Some("test@example.com")
    );
}

#[tokio::test]
async fn login_accepts_a_body_without_user() {
    let service = MockService::ok(json!({ "token": "fake-token" }).to_string()).await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    let res = api.login(&credentials()).await.unwrap();

    assert_eq!(res.token().as_deref(), Some("fake-token"));
    assert!(res.user().is_none());
    assert!(res.into_auth().is_none());
}

#[tokio::test]
async fn login_accepts_a_numeric_token_and_null_user() {
    let body = json!({ "token": 12345, "user": null });
    let service = MockService::ok(body.to_string()).await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    let res = api.login(&credentials()).await.unwrap();

    assert_eq!(res.as_value(), &body);
    assert_eq!(res.token().as_deref(), Some("12345"));
    assert!(res.user().is_none());
}

#[tokio::test]
async fn login_accepts_null_members_in_the_user() {
    let mut body = login_body();
    body["user"]["first_name"] = serde_json::Value::Null;
    let service = MockService::ok(body.to_string()).await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    let res = api.login(&credentials()).await.unwrap();

    assert_eq!(res.as_value(), &body);
    let (token, user) = res.into_auth().unwrap();
    assert_eq!(token, "fake-jwt-token");
    assert_eq!(user.first_name, "");
    assert_eq!(user.email, "test@example.com");
}

#[tokio::test]
async fn login_accepts_a_body_that_is_not_an_object() {
    let service = MockService::ok(r#""ok""#).await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    let res = api.login(&credentials()).await.unwrap();

    assert_eq!(res.as_value(), &json!("ok"));
    assert!(res.into_auth().is_none());
}

#[tokio::test]
async fn login_passes_401_through_untouched() {
    let body = json!({ "message": "Invalid credentials" }).to_string();
    let service = MockService::start(StatusCode::UNAUTHORIZED, body.clone()).await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    let err = api.login(&credentials()).await.unwrap_err();

    match err {
        ApiError::Http { status, body: got } => {
            assert_eq!(status, 401);
            assert_eq!(got, body);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(service.requests().len(), 1);
}

#[tokio::test]
async fn login_passes_500_through_untouched() {
    let body = json!({ "message": "Internal server error" }).to_string();
    let service = MockService::start(StatusCode::INTERNAL_SERVER_ERROR, body.clone()).await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    let err = api.login(&credentials()).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, ApiError::Http { body: ref got, .. } if *got == body));
}

#[tokio::test]
async fn login_surfaces_network_errors() {
    let api = AuthApi::new(closed_url(AUTH_PREFIX).await);

    let err = api.login(&credentials()).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn register_posts_full_data_and_resolves_to_unit() {
    let service = MockService::ok("{}").await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    let () = api.register(&register_data()).await.unwrap();

    let req = service.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/api/auth/register");
    assert_eq!(
        req.body,
        json!({
            "email": "newuser@example.com",
            "password": "password123",
            "firstName": "New",
            "lastName": "User",
            "alias": "newuser",
            "birthDate": "1995-05-15"
        })
    );
}

#[tokio::test]
async fn register_forwards_extra_fields() {
    let service = MockService::ok("{}").await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    let mut data = register_data();
    data.extra
        .insert("extraField".into(), json!("should be ignored by server"));
    api.register(&data).await.unwrap();

    let req = service.only_request();
    assert_eq!(req.body["extraField"], json!("should be ignored by server"));
    assert_eq!(req.body["alias"], json!("newuser"));
}

#[tokio::test]
async fn register_ignores_the_response_body() {
    let service = MockService::start(StatusCode::CREATED, "Created").await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    assert!(api.register(&register_data()).await.is_ok());
}

#[tokio::test]
async fn register_passes_validation_errors_through() {
    let body = json!({
        "message": "Validation failed",
        "errors": {
            "email": "Email already exists",
            "alias": "Alias already taken"
        }
    })
    .to_string();
    let service = MockService::start(StatusCode::BAD_REQUEST, body.clone()).await;
    let api = AuthApi::new(service.url(AUTH_PREFIX));

    let err = api.register(&register_data()).await.unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 400, body: ref got } if *got == body));
}

#[tokio::test]
async fn register_surfaces_network_errors() {
    let api = AuthApi::new(closed_url(AUTH_PREFIX).await);

    let err = api.register(&register_data()).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}
