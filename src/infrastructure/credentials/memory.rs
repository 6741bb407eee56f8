//! Fixed in-process credential set
//!
//! The compiled-in flavor of the credential source: a linear scan over
//! an immutable list of demo accounts.

use async_trait::async_trait;

use crate::auth::CredentialSource;
use crate::domain::{AuthResult, CredentialRecord, Role};

pub struct MemoryCredentials {
    records: Vec<CredentialRecord>,
}

impl MemoryCredentials {
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        Self { records }
    }

    /// The three demo accounts shipped with the portal.
    pub fn with_demo_accounts() -> Self {
        Self::new(demo_accounts())
    }
}

/// Demo accounts. Passwords are plaintext, matching the demo
/// credential model; do not model production credentials on this.
pub fn demo_accounts() -> Vec<CredentialRecord> {
    vec![
        CredentialRecord {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
        },
        CredentialRecord {
            id: "2".to_string(),
            name: "John Doe".to_string(),
            email: "caretaker@example.com".to_string(),
            password: "care123".to_string(),
            role: Role::Caretaker,
        },
        CredentialRecord {
            id: "3".to_string(),
            name: "Family Member".to_string(),
            email: "family@example.com".to_string(),
            password: "family123".to_string(),
            role: Role::Family,
        },
    ]
}

#[async_trait]
impl CredentialSource for MemoryCredentials {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> AuthResult<Option<CredentialRecord>> {
        // Case-sensitive exact match on both fields, first match wins.
        Ok(self
            .records
            .iter()
            .find(|r| r.email == email && r.password == password)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exact_match_finds_record() {
        let source = MemoryCredentials::with_demo_accounts();
        let found = source
            .find_by_credentials("family@example.com", "family123")
            .await
            .unwrap();
        assert_eq!(found.map(|r| r.id), Some("3".to_string()));
    }

    #[tokio::test]
    async fn partial_match_finds_nothing() {
        let source = MemoryCredentials::with_demo_accounts();
        // Right email, wrong password.
        assert!(source
            .find_by_credentials("family@example.com", "admin123")
            .await
            .unwrap()
            .is_none());
        // Right password, wrong email.
        assert!(source
            .find_by_credentials("admin@example.com", "family123")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_records_resolve_to_first() {
        let mut records = demo_accounts();
        let mut shadow = records[0].clone();
        shadow.id = "99".to_string();
        records.push(shadow);

        let source = MemoryCredentials::new(records);
        let found = source
            .find_by_credentials("admin@example.com", "admin123")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, "1");
    }
}
