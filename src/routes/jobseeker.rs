use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Jobseeker Router Module
///
/// Every path here starts with `/jobseeker`. Requests without a token are sent to
/// `/login`; requests with any role other than `jobseeker` are sent to the
/// employer dashboard.
pub fn jobseeker_routes() -> Router<AppState> {
    Router::new()
        // GET /jobseeker/dashboard
        .route("/jobseeker/dashboard", get(handlers::jobseeker_dashboard))
}
