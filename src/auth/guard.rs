//! Route guard
//!
//! Pure allow/redirect decision over (auth state, required role), plus
//! the axum middleware that applies it to guarded routes. Redirects are
//! routing outcomes, not errors: an unauthenticated visitor lands on
//! the login page, a wrong-role visitor lands on home.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::service::AuthService;
use crate::domain::{Identity, Role};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

/// Decide whether the current visitor may enter a guarded route.
///
/// Role comparison is exact equality only, with no hierarchy and no
/// wildcards.
/// An admin does not pass a caretaker guard, and any role the guard
/// does not recognize fails closed.
pub fn check(identity: Option<&Identity>, required: Option<&Role>) -> GuardDecision {
    let Some(identity) = identity else {
        return GuardDecision::RedirectToLogin;
    };
    match required {
        Some(role) if identity.role != *role => GuardDecision::RedirectToHome,
        _ => GuardDecision::Allow,
    }
}

/// Guard configuration for one route group.
#[derive(Clone)]
pub struct GuardState {
    pub auth: Arc<AuthService>,
    pub required: Option<Role>,
}

/// Middleware applying [`check`] to the request.
///
/// On `Allow` the Identity is inserted into request extensions so
/// handlers can render the role display without re-reading the session.
pub async fn guard_middleware(
    State(state): State<GuardState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let identity = state.auth.current_identity().await;
    match check(identity.as_ref(), state.required.as_ref()) {
        GuardDecision::Allow => {
            if let Some(identity) = identity {
                request.extensions_mut().insert(identity);
            }
            next.run(request).await
        }
        GuardDecision::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
        GuardDecision::RedirectToHome => Redirect::to(HOME_PATH).into_response(),
    }
}
