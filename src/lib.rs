use axum::{
    Router,
    extract::{FromRef, Request, State},
    http::HeaderName,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod handlers;

// Routes grouped by the protected prefix they live under.
pub mod routes;
use auth::SessionCookies;
use routes::{employer, jobseeker, public};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use error::AppError;
pub use guard::{ProtectedArea, RouteDecision, RouteGuard};

/// AppState
///
/// The single immutable container shared across all requests: the loaded
/// configuration and the route guard bound to its protected-area table.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub guard: RouteGuard,
}

// --- Axum FromRef Extractor Implementations ---

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for RouteGuard {
    fn from_ref(app_state: &AppState) -> RouteGuard {
        app_state.guard
    }
}

/// route_guard
///
/// Middleware adapter around `RouteGuard::evaluate`. It hands the guard the
/// request path and the two session cookies as plain values, then either forwards
/// the request untouched or answers with a 307 redirect.
async fn route_guard(
    State(guard): State<RouteGuard>,
    cookies: SessionCookies,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    match guard.evaluate(path, cookies.token(), cookies.role()) {
        RouteDecision::Continue => next.run(request).await,
        RouteDecision::Redirect(target) => {
            tracing::debug!(path, target, "route guard redirect");
            Redirect::temporary(target).into_response()
        }
    }
}

/// create_router
///
/// Assembles the routing structure, wraps it in the route guard and the
/// observability layers, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        .merge(public::public_routes())
        .merge(employer::employer_routes())
        .merge(jobseeker::jobseeker_routes())
        // The guard wraps every route and the 404 fallback, so an unknown
        // `/employer/...` path is still redirected before it can 404.
        // Unprotected paths pass straight through.
        .layer(middleware::from_fn_with_state(state.clone(), route_guard))
        .with_state(state);

    // 3. Observability and Correlation Layers
    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer
        .layer(cors)
}

/// trace_span_logger
///
/// Span builder for `TraceLayer`: every log line for a request carries its
/// method, URI and `x-request-id`.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
