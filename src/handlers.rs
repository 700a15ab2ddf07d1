use crate::config::{AppConfig, Env};
use axum::{Json, extract::State, response::Html};
use serde::Serialize;

// --- Static Pages ---

/// Landing page served at the application root. No inputs, no state.
pub const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>SkillGanga</title>
</head>
<body>
<main style="display:flex;min-height:100vh;flex-direction:column;align-items:center;justify-content:center;padding:6rem">
<h1 style="font-size:2.25rem;font-weight:700">SkillGanga - Job Portal Platform</h1>
<p style="margin-top:1rem;font-size:1.125rem;color:#4b5563">A modern full-stack job portal connecting job seekers with employers</p>
</main>
</body>
</html>
"#;

// The pages below are placeholders for screens rendered by other services.
// They exist so every redirect the guard emits lands on a real route.

pub const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Sign in | SkillGanga</title></head>
<body><main><h1>Sign in</h1></main></body>
</html>
"#;

pub const EMPLOYER_DASHBOARD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Employer dashboard | SkillGanga</title></head>
<body><main><h1>Employer dashboard</h1></main></body>
</html>
"#;

pub const JOBSEEKER_DASHBOARD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Jobseeker dashboard | SkillGanga</title></head>
<body><main><h1>Jobseeker dashboard</h1></main></body>
</html>
"#;

/// HealthStatus
///
/// Body of the health check, consumed by load balancers and uptime monitors.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub env: Env,
}

// --- Handlers ---

/// [Public Route] The application's landing page.
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// [Public Route] Liveness probe. Reports the runtime environment alongside "ok".
pub async fn health(State(config): State<AppConfig>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        env: config.env,
    })
}

/// [Public Route] Target of the guard's "no token" redirect.
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// [Employer Route] Reached only with a token and the `employer` role.
pub async fn employer_dashboard() -> Html<&'static str> {
    Html(EMPLOYER_DASHBOARD_PAGE)
}

/// [Jobseeker Route] Reached only with a token and the `jobseeker` role.
pub async fn jobseeker_dashboard() -> Html<&'static str> {
    Html(JOBSEEKER_DASHBOARD_PAGE)
}
