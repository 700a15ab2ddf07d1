use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Endpoints outside both protected prefixes. The guard passes these through
/// unconditionally, even for anonymous visitors.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /
        // Static landing page for the portal.
        .route("/", get(handlers::landing_page))
        // GET /health
        // Unauthenticated liveness probe for monitoring and load balancer checks.
        .route("/health", get(handlers::health))
        // GET /login
        // Where the guard sends protected requests that carry no token. Being outside
        // both protected prefixes, it can never redirect back to itself.
        .route("/login", get(handlers::login_page))
}
