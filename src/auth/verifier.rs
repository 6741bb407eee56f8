//! Credential verification
//!
//! Maps an (email, password) pair to an [`Identity`] or a uniform
//! failure. Comparison is plaintext exact match, mirroring the demo
//! credential model. Not a production verifier: no hashing, no rate
//! limiting.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{AuthError, AuthResult, CredentialRecord, Identity};

/// Source of credential records.
///
/// The only capability the core needs: exact-match lookup by email and
/// password, returning at most one record (first match wins when the
/// set degenerately contains duplicates).
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> AuthResult<Option<CredentialRecord>>;
}

/// Checks submitted credentials against a [`CredentialSource`].
#[derive(Clone)]
pub struct Verifier {
    source: Arc<dyn CredentialSource>,
}

impl Verifier {
    pub fn new(source: Arc<dyn CredentialSource>) -> Self {
        Self { source }
    }

    /// Verify a credential pair.
    ///
    /// On a miss the error is always [`AuthError::InvalidCredentials`],
    /// whether the email was unknown or the password wrong.
    pub async fn verify(&self, email: &str, password: &str) -> AuthResult<Identity> {
        match self.source.find_by_credentials(email, password).await? {
            Some(record) => Ok(record.into_identity()),
            None => Err(AuthError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::infrastructure::credentials::MemoryCredentials;

    fn verifier() -> Verifier {
        Verifier::new(Arc::new(MemoryCredentials::with_demo_accounts()))
    }

    #[tokio::test]
    async fn valid_pair_yields_identity_without_password() {
        let identity = verifier()
            .verify("caretaker@example.com", "care123")
            .await
            .unwrap();
        assert_eq!(identity.id, "2");
        assert_eq!(identity.name, "John Doe");
        assert_eq!(identity.role, Role::Caretaker);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_fail_alike() {
        let v = verifier();
        let wrong_password = v.verify("admin@example.com", "wrongpass").await;
        let unknown_email = v.verify("nobody@example.com", "admin123").await;
        assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(AuthError::InvalidCredentials)));
        // Same display text either way: the caller cannot tell which
        // field was wrong.
        assert_eq!(
            wrong_password.unwrap_err().to_string(),
            unknown_email.unwrap_err().to_string()
        );
    }

    #[tokio::test]
    async fn email_match_is_case_sensitive() {
        let result = verifier().verify("Admin@Example.com", "admin123").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
