use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Employer Router Module
///
/// Every path here starts with `/employer`. Requests without a token are sent to
/// `/login`; requests with any role other than `employer` are sent to the
/// jobseeker dashboard.
pub fn employer_routes() -> Router<AppState> {
    Router::new()
        // GET /employer/dashboard
        // Home of an employer session. Also where sessions without the `jobseeker`
        // role end up when they request a `/jobseeker` path.
        .route("/employer/dashboard", get(handlers::employer_dashboard))
}
