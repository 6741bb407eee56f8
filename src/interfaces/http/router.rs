//! HTTP router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::handlers::{auth, health, portal};
use crate::auth::guard::{guard_middleware, GuardState};
use crate::auth::AuthService;
use crate::domain::Role;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<AuthService>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::logout,
        auth::session,
        // Portal
        portal::home,
        portal::login_page,
        portal::admin_portal,
        portal::caretaker_portal,
        portal::family_portal,
    ),
    components(
        schemas(
            ApiResponse<String>,
            auth::LoginRequest,
            auth::SessionUser,
            auth::SessionResponse,
            portal::LandingView,
            portal::PortalView,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Session management: login, logout, session state"),
        (name = "Portal", description = "Public pages and role-scoped portal views"),
    ),
    info(
        title = "CarePortal API",
        version = "0.1.0",
        description = "Patient-care portal: authentication, session and role-guarded views",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// A portal route reachable only with the exact required role.
fn guarded_route(
    path: &str,
    handler: axum::routing::MethodRouter<HttpState>,
    auth: Arc<AuthService>,
    required: Role,
) -> Router<HttpState> {
    Router::new().route(path, handler).layer(middleware::from_fn_with_state(
        GuardState {
            auth,
            required: Some(required),
        },
        guard_middleware,
    ))
}

/// Create the router with all routes, guards and layers.
pub fn create_router(auth: Arc<AuthService>) -> Router {
    let state = HttpState { auth: auth.clone() };

    Router::new()
        .route("/", get(portal::home))
        .route("/login", get(portal::login_page))
        .route("/health", get(health::health_check))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/session", get(auth::session))
        .merge(guarded_route(
            "/admin",
            get(portal::admin_portal),
            auth.clone(),
            Role::Admin,
        ))
        .merge(guarded_route(
            "/caretaker",
            get(portal::caretaker_portal),
            auth.clone(),
            Role::Caretaker,
        ))
        .merge(guarded_route(
            "/family",
            get(portal::family_portal),
            auth,
            Role::Family,
        ))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::auth::{MalformedSessionPolicy, Verifier};
    use crate::infrastructure::credentials::MemoryCredentials;
    use crate::infrastructure::session::MemorySessionStore;

    fn test_router() -> Router {
        let verifier = Verifier::new(Arc::new(MemoryCredentials::with_demo_accounts()));
        let auth = Arc::new(AuthService::new(
            verifier,
            Arc::new(MemorySessionStore::new()),
            MalformedSessionPolicy::Reset,
        ));
        create_router(auth)
    }

    fn login_request(email: &str, password: &str) -> Request<Body> {
        let body = json!({ "email": email, "password": password });
        Request::builder()
            .method("POST")
            .uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::http::Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let response = test_router().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn admin_login_then_admin_route_allows() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(login_request("admin@example.com", "admin123"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["id"], json!("1"));
        assert_eq!(body["data"]["name"], json!("Admin User"));
        assert_eq!(body["data"]["role"], json!("admin"));

        let response = app.oneshot(get("/admin")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_password_is_a_generic_401() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(login_request("admin@example.com", "wrongpass"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["error"], json!("Invalid credentials"));

        // State remained anonymous.
        let response = app.oneshot(get("/api/v1/auth/session")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["data"]["authenticated"], json!(false));
    }

    #[tokio::test]
    async fn unknown_email_fails_with_the_same_message() {
        let app = test_router();
        let response = app
            .oneshot(login_request("nobody@example.com", "admin123"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["error"], json!("Invalid credentials"));
    }

    #[tokio::test]
    async fn unauthenticated_guarded_route_redirects_to_login() {
        let app = test_router();
        for uri in ["/admin", "/caretaker", "/family"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[header::LOCATION], "/login");
        }
    }

    #[tokio::test]
    async fn wrong_role_redirects_home_not_to_login() {
        let app = test_router();
        app.clone()
            .oneshot(login_request("caretaker@example.com", "care123"))
            .await
            .unwrap();

        let response = app.clone().oneshot(get("/admin")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        // The matching portal still works.
        let response = app.oneshot(get("/caretaker")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn logout_closes_the_session() {
        let app = test_router();
        app.clone()
            .oneshot(login_request("family@example.com", "family123"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/family")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn session_endpoint_projects_current_state() {
        let app = test_router();

        let body = json_body(app.clone().oneshot(get("/api/v1/auth/session")).await.unwrap()).await;
        assert_eq!(body["data"]["authenticated"], json!(false));
        assert_eq!(body["data"]["user"], json!(null));

        app.clone()
            .oneshot(login_request("admin@example.com", "admin123"))
            .await
            .unwrap();

        let body = json_body(app.oneshot(get("/api/v1/auth/session")).await.unwrap()).await;
        assert_eq!(body["data"]["authenticated"], json!(true));
        assert_eq!(body["data"]["user"]["email"], json!("admin@example.com"));
    }

    #[tokio::test]
    async fn empty_login_fields_are_rejected_by_validation() {
        let app = test_router();
        let response = app.oneshot(login_request("", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
