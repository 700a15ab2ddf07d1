use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use skillganga_portal::{AppConfig, AppState, RouteGuard, create_router};
use tower::ServiceExt;

// --- Helpers ---

fn app() -> Router {
    create_router(AppState {
        config: AppConfig::default(),
        guard: RouteGuard::default(),
    })
}

async fn get(path: &str, cookie: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().uri(path);
    if let Some(value) = cookie {
        builder = builder.header(header::COOKIE, value);
    }
    app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// --- Public Routes ---

#[tokio::test]
async fn test_landing_page_is_public() {
    let response = get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let body = body_text(response).await;
    assert!(body.contains("SkillGanga - Job Portal Platform"));
    assert!(body.contains("connecting job seekers with employers"));
}

#[tokio::test]
async fn test_health_reports_env() {
    let response = get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["env"], "local");
}

#[tokio::test]
async fn test_login_page_is_reachable_anonymously() {
    let response = get("/login", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_public_path_is_not_redirected() {
    let response = get("/nowhere", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// --- Guarded Routes ---

#[tokio::test]
async fn test_anonymous_employer_request_redirects_to_login() {
    let response = get("/employer/dashboard", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_guard_runs_before_not_found() {
    let response = get("/employer/jobs/5", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_employer_session_reaches_employer_dashboard() {
    let response = get("/employer/dashboard", Some("token=abc; role=employer")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Employer dashboard"));
}

#[tokio::test]
async fn test_jobseeker_session_is_rerouted_from_employer_area() {
    let response = get("/employer/jobs/5", Some("token=abc; role=jobseeker")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/jobseeker/dashboard");
}

#[tokio::test]
async fn test_jobseeker_session_reaches_jobseeker_dashboard() {
    let response = get("/jobseeker/dashboard", Some("token=abc; role=jobseeker")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Jobseeker dashboard"));
}

#[tokio::test]
async fn test_unknown_role_is_rerouted_from_jobseeker_area() {
    let response = get("/jobseeker/dashboard", Some("token=abc; role=admin")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/employer/dashboard");
}

#[tokio::test]
async fn test_empty_token_cookie_redirects_to_login() {
    let response = get("/jobseeker/dashboard", Some("token=; role=jobseeker")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}

// --- Observability Layers ---

#[tokio::test]
async fn test_request_id_is_propagated() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn test_redirects_also_carry_request_id() {
    let response = get("/employer/dashboard", None).await;
    assert!(response.headers().contains_key("x-request-id"));
}
