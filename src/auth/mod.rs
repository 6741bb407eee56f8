//! Authentication and session management
//!
//! Credential verification, the single client session, and the route
//! guard gating role-scoped portal routes.

pub mod guard;
pub mod service;
pub mod session_store;
pub mod verifier;

pub use guard::{check, GuardDecision, GuardState};
pub use service::{AuthService, MalformedSessionPolicy};
pub use session_store::SessionStore;
pub use verifier::{CredentialSource, Verifier};
