use axum::{
    http::HeaderValue,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{elevated, protected, public};
use crate::middleware::{
    envelope_middleware, jwt_auth_middleware, quota_middleware, require_root_middleware,
    validate_tenant_middleware,
};
use crate::state::AppState;

/// Full application router. Every response passes through the envelope layer.
pub fn app(state: AppState) -> Router {
    let routes = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // Protected API
        .merge(protected_routes(&state))
        // Root administration
        .merge(root_routes(&state));

    with_boundary(routes, state)
}

/// Outer layers shared by every route: panic recovery, the envelope
/// boundary, request tracing and CORS.
pub fn with_boundary(routes: Router<AppState>, state: AppState) -> Router {
    let mut app = routes
        .with_state(state.clone())
        .layer(CatchPanicLayer::new())
        .layer(from_fn_with_state(state.clone(), envelope_middleware));

    if state.config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app.layer(cors_layer(&state.config.security))
}

fn protected_routes(state: &AppState) -> Router<AppState> {
    // Layers run bottom-up: JWT, then tenant, then quota
    Router::new()
        .route("/api/auth/whoami", get(protected::whoami))
        .route("/api/tenant", get(protected::current_tenant))
        .route_layer(from_fn_with_state(state.clone(), quota_middleware))
        .route_layer(from_fn_with_state(state.clone(), validate_tenant_middleware))
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware))
}

fn root_routes(state: &AppState) -> Router<AppState> {
    use elevated::root::tenant;

    Router::new()
        .route("/api/root/tenant", get(tenant::tenant_list).post(tenant::tenant_create))
        .route(
            "/api/root/tenant/:name",
            get(tenant::tenant_show).patch(tenant::tenant_update),
        )
        .route_layer(from_fn(require_root_middleware))
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
