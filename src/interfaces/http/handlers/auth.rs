//! Authentication API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{AuthError, Identity};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::interfaces::http::router::HttpState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Public view of the logged-in user, as the dashboards consume it.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<Identity> for SessionUser {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
            role: identity.role.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub user: Option<SessionUser>,
}

type ErrorReply<T> = (StatusCode, Json<ApiResponse<T>>);

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<SessionUser>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<HttpState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<SessionUser>>, ErrorReply<SessionUser>> {
    match state.auth.login(&request.email, &request.password).await {
        Ok(identity) => Ok(Json(ApiResponse::success(identity.into()))),
        // The generic message, regardless of which field was wrong.
        Err(AuthError::InvalidCredentials) => Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid credentials")),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Session closed (idempotent)")
    )
)]
pub async fn logout(
    State(state): State<HttpState>,
) -> Result<Json<ApiResponse<()>>, ErrorReply<()>> {
    state.auth.logout().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;
    Ok(Json(ApiResponse::success(())))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/session",
    tag = "Authentication",
    responses(
        (status = 200, description = "Current session state", body = ApiResponse<SessionResponse>)
    )
)]
pub async fn session(State(state): State<HttpState>) -> Json<ApiResponse<SessionResponse>> {
    let user = state.auth.current_identity().await;
    Json(ApiResponse::success(SessionResponse {
        authenticated: user.is_some(),
        user: user.map(SessionUser::from),
    }))
}
