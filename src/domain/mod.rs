//! Core domain types for the auth/session core

pub mod errors;
pub mod identity;

pub use errors::{AuthError, AuthResult};
pub use identity::{CredentialRecord, Identity, Role};
