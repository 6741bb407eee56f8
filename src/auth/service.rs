//! Auth service: session lifecycle and login state machine
//!
//! Composes the credential [`Verifier`] and a [`SessionStore`] behind
//! `login` / `logout` / `is_authenticated`. Constructed once at startup
//! and injected where needed; there is no ambient global state.

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use super::session_store::SessionStore;
use super::verifier::Verifier;
use crate::domain::{AuthError, AuthResult, Identity};

/// What to do when the persisted session is present but undecodable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedSessionPolicy {
    /// Fall back to anonymous silently (logged at WARN).
    Reset,
    /// Surface the error to the caller of `restore`.
    Reject,
}

impl Default for MalformedSessionPolicy {
    fn default() -> Self {
        Self::Reset
    }
}

/// Process-wide session service.
///
/// The session is a single optional [`Identity`]; "is authenticated" is
/// a projection of it, so the two can never disagree. State machine:
/// anonymous → authenticated(identity) on successful login, back to
/// anonymous on logout. The transient "authenticating" state is held
/// entirely inside the serialized `login` call.
pub struct AuthService {
    verifier: Verifier,
    session_store: Arc<dyn SessionStore>,
    on_malformed: MalformedSessionPolicy,
    session: RwLock<Option<Identity>>,
    // Single-flight lock: concurrent logins serialize instead of racing
    // the session and the persisted blob.
    login_flight: Mutex<()>,
}

impl AuthService {
    pub fn new(
        verifier: Verifier,
        session_store: Arc<dyn SessionStore>,
        on_malformed: MalformedSessionPolicy,
    ) -> Self {
        Self {
            verifier,
            session_store,
            on_malformed,
            session: RwLock::new(None),
            login_flight: Mutex::new(()),
        }
    }

    /// Restore the session from persisted state.
    ///
    /// Called once at startup, before any consumer reads
    /// `is_authenticated`. Idempotent over an unchanged persisted value.
    pub async fn restore(&self) -> AuthResult<Option<Identity>> {
        let restored = match self.session_store.restore().await {
            Ok(value) => value,
            Err(AuthError::MalformedSession(detail)) => match self.on_malformed {
                MalformedSessionPolicy::Reset => {
                    warn!("persisted session is malformed, resetting to anonymous: {detail}");
                    None
                }
                MalformedSessionPolicy::Reject => {
                    return Err(AuthError::MalformedSession(detail));
                }
            },
            Err(e) => return Err(e),
        };

        *self.session.write().await = restored.clone();
        match &restored {
            Some(identity) => info!(email = %identity.email, role = %identity.role, "session restored"),
            None => info!("no persisted session, starting anonymous"),
        }
        Ok(restored)
    }

    /// Verify credentials and open a session.
    ///
    /// On success the session is replaced wholesale and persisted; on
    /// failure the previous state is left untouched and the caller gets
    /// the uniform [`AuthError::InvalidCredentials`].
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Identity> {
        let _flight = self.login_flight.lock().await;

        let identity = self.verifier.verify(email, password).await?;
        self.session_store.persist(&identity).await?;
        *self.session.write().await = Some(identity.clone());
        info!(email = %identity.email, role = %identity.role, "login succeeded");
        Ok(identity)
    }

    /// Close the session. Unconditional and idempotent: logging out of
    /// an anonymous session is a no-op that still clears the store.
    pub async fn logout(&self) -> AuthResult<()> {
        *self.session.write().await = None;
        self.session_store.clear().await?;
        info!("logged out");
        Ok(())
    }

    pub async fn current_identity(&self) -> Option<Identity> {
        self.session.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }
}
