mod common;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use sqlx::PgPool;
use std::net::SocketAddr;
use todos_api::routes::app_router;
use tower::ServiceExt;

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let mut req = builder.body(body).unwrap();
    req.extensions_mut()
        .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))));
    req
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[sqlx::test]
async fn test_health_is_public(pool: PgPool) {
    let app = app_router(common::create_test_state(pool), false);

    let response = app
        .oneshot(request("GET", "/health", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[sqlx::test]
async fn test_todos_require_token(pool: PgPool) {
    let app = app_router(common::create_test_state(pool), false);

    let response = app.oneshot(request("GET", "/", None, None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
    assert_eq!(body_json(response).await, json!({"detail": "Not authenticated"}));
}

#[sqlx::test]
async fn test_create_with_trailing_slash(pool: PgPool) {
    let app = app_router(common::create_test_state(pool.clone()), false);
    let token = common::token_for(&common::jayhus());

    let response = app
        .oneshot(request(
            "POST",
            "/todo/",
            Some(&token),
            Some(json!({
                "title": "Learn coding!",
                "description": "Need to practice everyday!",
                "priority": 5,
                "complete": false
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["owner_id"], 1);
    assert_eq!(common::count_todos(&pool).await, 1);
}

#[sqlx::test]
async fn test_unknown_path_is_json_not_found(pool: PgPool) {
    let app = app_router(common::create_test_state(pool), false);

    let response = app
        .oneshot(request("GET", "/nowhere", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"detail": "Not Found"}));
}

#[sqlx::test]
async fn test_wrong_method_is_json_method_not_allowed(pool: PgPool) {
    let id = common::create_test_todo(&pool, "Learn coding!", 1).await;
    let app = app_router(common::create_test_state(pool), false);
    let token = common::token_for(&common::jayhus());

    let response = app
        .oneshot(request("PATCH", &format!("/todo/{id}"), Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body_json(response).await,
        json!({"detail": "Method Not Allowed"})
    );
}

#[sqlx::test]
async fn test_rate_limit_rejects_bursts(pool: PgPool) {
    let app = app_router(common::create_test_state(pool), false);
    let token = common::token_for(&common::jayhus());

    let mut first_status = None;
    let mut limited = None;
    for _ in 0..110 {
        let response = app
            .clone()
            .oneshot(request("GET", "/", Some(&token), None))
            .await
            .unwrap();
        first_status.get_or_insert(response.status());
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            limited = Some(response);
            break;
        }
    }

    assert_eq!(first_status, Some(StatusCode::OK));

    let response = limited.expect("burst was never limited");
    assert!(response.headers().contains_key("retry-after"));
    let json = body_json(response).await;
    assert!(json["detail"].as_str().unwrap().starts_with("Too Many Requests"));
}
