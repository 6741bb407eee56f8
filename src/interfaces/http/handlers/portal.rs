//! Portal page handlers
//!
//! The public landing and login entry points (redirect targets for the
//! route guard) and the role-scoped portal views. The views return only
//! the role display and identity; the full dashboards live outside
//! this core.

use axum::{extract::State, Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

use super::auth::SessionUser;
use crate::domain::Identity;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::router::HttpState;

#[derive(Debug, Serialize, ToSchema)]
pub struct LandingView {
    pub title: String,
    pub authenticated: bool,
    pub user: Option<SessionUser>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PortalView {
    pub title: String,
    pub user: SessionUser,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Portal",
    responses(
        (status = 200, description = "Public landing page", body = ApiResponse<LandingView>)
    )
)]
pub async fn home(State(state): State<HttpState>) -> Json<ApiResponse<LandingView>> {
    let user = state.auth.current_identity().await;
    Json(ApiResponse::success(LandingView {
        title: "CarePortal".to_string(),
        authenticated: user.is_some(),
        user: user.map(SessionUser::from),
    }))
}

#[utoipa::path(
    get,
    path = "/login",
    tag = "Portal",
    responses(
        (status = 200, description = "Login entry point", body = ApiResponse<LandingView>)
    )
)]
pub async fn login_page(State(state): State<HttpState>) -> Json<ApiResponse<LandingView>> {
    let user = state.auth.current_identity().await;
    Json(ApiResponse::success(LandingView {
        title: "Sign in to CarePortal".to_string(),
        authenticated: user.is_some(),
        user: user.map(SessionUser::from),
    }))
}

#[utoipa::path(
    get,
    path = "/admin",
    tag = "Portal",
    responses(
        (status = 200, description = "Admin portal view", body = ApiResponse<PortalView>),
        (status = 303, description = "Redirected to /login or /")
    )
)]
pub async fn admin_portal(Extension(identity): Extension<Identity>) -> Json<ApiResponse<PortalView>> {
    Json(ApiResponse::success(PortalView {
        title: "Admin Dashboard".to_string(),
        user: identity.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/caretaker",
    tag = "Portal",
    responses(
        (status = 200, description = "Caretaker portal view", body = ApiResponse<PortalView>),
        (status = 303, description = "Redirected to /login or /")
    )
)]
pub async fn caretaker_portal(
    Extension(identity): Extension<Identity>,
) -> Json<ApiResponse<PortalView>> {
    Json(ApiResponse::success(PortalView {
        title: "Caretaker Dashboard".to_string(),
        user: identity.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/family",
    tag = "Portal",
    responses(
        (status = 200, description = "Family portal view", body = ApiResponse<PortalView>),
        (status = 303, description = "Redirected to /login or /")
    )
)]
pub async fn family_portal(
    Extension(identity): Extension<Identity>,
) -> Json<ApiResponse<PortalView>> {
    Json(ApiResponse::success(PortalView {
        title: "Family Dashboard".to_string(),
        user: identity.into(),
    }))
}
