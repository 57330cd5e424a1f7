mod common;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;

use common::{assert_envelope_shape, TestApp};

#[tokio::test]
async fn root_endpoint_is_enveloped() -> Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get("/", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_envelope_shape(&body);
    assert_eq!(body["success"], true);
    assert_eq!(body["code"], 2000);
    assert_eq!(body["message"], "操作成功");
    assert_eq!(body["data"]["name"], "Tenant Admin API");
    Ok(())
}

#[tokio::test]
async fn health_reports_tenant_count() -> Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get("/health", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_envelope_shape(&body);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["tenants"], 3);
    Ok(())
}

#[tokio::test]
async fn unknown_route_gets_not_found_envelope() -> Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get("/does/not/exist", None).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "code": 4004, "message": "请求的资源不存在", "data": null})
    );
    Ok(())
}

#[tokio::test]
async fn wrong_method_keeps_status_remainder() -> Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.send(Method::DELETE, "/health", None, None).await?;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_envelope_shape(&body);
    assert_eq!(body["code"], 4405);
    assert_eq!(body["message"], "请求错误");
    Ok(())
}

#[tokio::test]
async fn malformed_json_surfaces_rejection_text() -> Result<()> {
    let app = TestApp::new()?;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/root/tenant")
        .header(header::AUTHORIZATION, format!("Bearer {}", app.root_token()))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))?;

    let (status, body) = app.send_raw(request).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope_shape(&body);
    assert_eq!(body["code"], 4000);
    assert!(
        body["message"].as_str().unwrap_or_default().starts_with("Failed to parse"),
        "unexpected message: {}",
        body["message"]
    );
    assert_eq!(body["data"], serde_json::Value::Null);
    Ok(())
}

#[tokio::test]
async fn missing_content_type_is_unsupported_media() -> Result<()> {
    let app = TestApp::new()?;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/root/tenant")
        .header(header::AUTHORIZATION, format!("Bearer {}", app.root_token()))
        .body(Body::from(r#"{"name": "initech"}"#))?;

    let (status, body) = app.send_raw(request).await?;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["code"], 4415);
    Ok(())
}

#[tokio::test]
async fn response_content_type_is_json() -> Result<()> {
    use tower::ServiceExt;

    let app = TestApp::new()?;
    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/nowhere").body(Body::empty())?)
        .await?;

    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    Ok(())
}

async fn explode() -> &'static str {
    panic!("handler blew up")
}

async fn forbidden_with_code() -> (StatusCode, axum::Json<serde_json::Value>) {
    (StatusCode::FORBIDDEN, axum::Json(json!({"code": 4109, "message": "x"})))
}

async fn unauthorized_claiming_success() -> (StatusCode, axum::Json<serde_json::Value>) {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(json!({"success": true, "code": 2000, "message": "ok", "data": null})),
    )
}

fn router_with(routes: axum::Router<tenant_admin_api::AppState>) -> Result<TestApp> {
    let app = TestApp::new()?;
    let router = tenant_admin_api::routes::with_boundary(routes, app.state.clone());
    Ok(TestApp { router, ..app })
}

#[tokio::test]
async fn panicking_handler_becomes_server_error_envelope() -> Result<()> {
    let app = router_with(axum::Router::new().route("/explode", axum::routing::get(explode)))?;
    let (status, body) = app.get("/explode", None).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "code": 5000, "message": "服务器内部错误", "data": null})
    );
    Ok(())
}

#[tokio::test]
async fn fixed_statuses_win_over_handler_payload() -> Result<()> {
    let app = router_with(
        axum::Router::new()
            .route("/forbidden", axum::routing::get(forbidden_with_code))
            .route("/unauthorized", axum::routing::get(unauthorized_claiming_success)),
    )?;

    let (status, body) = app.get("/forbidden", None).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        json!({"success": false, "code": 4003, "message": "您没有执行该操作的权限", "data": null})
    );

    let (status, body) = app.get("/unauthorized", None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({"success": false, "code": 4001, "message": "认证失败，请登录", "data": null})
    );
    Ok(())
}
