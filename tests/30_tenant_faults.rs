mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{assert_envelope_shape, TestApp};

#[tokio::test]
async fn unknown_tenant_is_4004() -> Result<()> {
    let app = TestApp::new()?;
    let token = app.token("initech", "peter", "full");
    let (status, body) = app.get("/api/tenant", Some(&token)).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "code": 4004, "message": "租户不存在", "data": null})
    );
    Ok(())
}

#[tokio::test]
async fn inactive_tenant_is_4003() -> Result<()> {
    let app = TestApp::new()?;
    let token = app.token("globex", "hank", "full");
    let (status, body) = app.get("/api/tenant", Some(&token)).await?;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        json!({"success": false, "code": 4003, "message": "租户未激活或已被禁用", "data": null})
    );
    Ok(())
}

#[tokio::test]
async fn current_tenant_reports_quota_usage() -> Result<()> {
    let app = TestApp::new()?;
    let token = app.token("acme", "alice", "full");

    let (status, body) = app.get("/api/tenant", Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_envelope_shape(&body);
    assert_eq!(body["data"]["name"], "acme");
    assert_eq!(body["data"]["quota"], json!({"used": 1, "limit": 3}));
    Ok(())
}

#[tokio::test]
async fn exhausted_quota_is_4029() -> Result<()> {
    let app = TestApp::new()?;
    let token = app.token("acme", "alice", "full");

    for _ in 0..3 {
        let (status, _) = app.get("/api/auth/whoami", Some(&token)).await?;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = app.get("/api/auth/whoami", Some(&token)).await?;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        body,
        json!({"success": false, "code": 4029, "message": "超出每日配额", "data": null})
    );
    Ok(())
}

#[tokio::test]
async fn quota_is_tracked_per_tenant() -> Result<()> {
    let app = TestApp::new()?;
    let acme = app.token("acme", "alice", "full");
    let platform = app.token("platform", "operator", "full");

    for _ in 0..3 {
        app.get("/api/tenant", Some(&acme)).await?;
    }
    let (status, _) = app.get("/api/tenant", Some(&acme)).await?;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    let (status, body) = app.get("/api/tenant", Some(&platform)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["quota"]["limit"], serde_json::Value::Null);
    Ok(())
}
