//! Session persistence trait
//!
//! One Identity under one fixed key. A second login overwrites the
//! first; there is no multi-session support, no expiry, and no
//! integrity check on the stored blob.

use async_trait::async_trait;

use crate::domain::{AuthResult, Identity};

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the persisted session.
    ///
    /// `Ok(None)` when nothing is stored. Stored-but-undecodable bytes
    /// surface as [`crate::domain::AuthError::MalformedSession`]; the
    /// service decides whether to reset or reject (see
    /// [`crate::auth::service::MalformedSessionPolicy`]).
    async fn restore(&self) -> AuthResult<Option<Identity>>;

    /// Serialize and store the Identity, replacing any previous value.
    async fn persist(&self, identity: &Identity) -> AuthResult<()>;

    /// Remove the persisted entry. Idempotent.
    async fn clear(&self) -> AuthResult<()>;
}
