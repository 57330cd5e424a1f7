use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use tenant_admin_api::{
    auth::{generate_jwt, Claims},
    config::AppConfig,
    services::{InMemoryTenantDirectory, TenantRecord},
    AppState,
};

pub const REGISTRY: &str = r#"
tenants:
  - name: acme
    display_name: Acme Corp
    daily_quota: 3
  - name: globex
    display_name: Globex
    is_active: false
  - name: platform
    display_name: Platform Operators
"#;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Result<Self> {
        let directory = InMemoryTenantDirectory::from_yaml_str(REGISTRY)?;
        Ok(Self::with_directory(directory))
    }

    pub fn with_records(records: Vec<TenantRecord>) -> Self {
        Self::with_directory(InMemoryTenantDirectory::from_records(records))
    }

    fn with_directory(directory: InMemoryTenantDirectory) -> Self {
        let mut config = AppConfig::development();
        config.api.enable_request_logging = false;
        let state = AppState::new(config, Arc::new(directory));
        let router = tenant_admin_api::app(state.clone());
        Self { router, state }
    }

    pub fn token(&self, tenant: &str, user: &str, access: &str) -> String {
        let claims = Claims::new(tenant.into(), user.into(), access.into(), 1).expect("claims");
        generate_jwt(&claims, &self.state.config.security.jwt_secret).expect("token")
    }

    pub fn root_token(&self) -> String {
        self.token("platform", "operator", "root")
    }

    pub async fn send(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        self.send_raw(request).await
    }

    pub async fn send_raw(&self, request: Request<Body>) -> Result<(StatusCode, Value)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json: Value = serde_json::from_slice(&bytes)?;
        Ok((status, json))
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
        self.send(Method::GET, uri, token, None).await
    }
}

/// Every body must be exactly the four envelope keys, in order.
pub fn assert_envelope_shape(body: &Value) {
    let keys: Vec<&str> = body
        .as_object()
        .expect("envelope must be an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["success", "code", "message", "data"], "unexpected envelope: {}", body);
    assert!(!body["message"].as_str().unwrap_or_default().is_empty());
}
