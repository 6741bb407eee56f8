//! Identity and credential models

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Access tier of a portal user.
///
/// The set is open: a role string unknown to this build round-trips
/// through [`Role::Other`] instead of being rejected, and never matches
/// a role-scoped guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Caretaker,
    Family,
    Superuser,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Caretaker => "caretaker",
            Self::Family => "family",
            Self::Superuser => "superuser",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            "caretaker" => Self::Caretaker,
            "family" => Self::Family,
            "superuser" => Self::Superuser,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Role::from(s.as_str()))
    }
}

/// Authenticated user's public profile.
///
/// Carries no credential material; produced only by a successful
/// credential check or by decoding a persisted session blob.
/// The serialized form `{id, name, email, role}` is also the session
/// wire format (no schema tag, no versioning).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Reference entry used only for verification.
///
/// A pre-existing external fact: the core looks records up but never
/// creates or mutates them. The password never travels past
/// [`CredentialRecord::into_identity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl CredentialRecord {
    /// Build the public Identity by dropping the password field.
    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}
