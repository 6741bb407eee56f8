//! # CarePortal Service
//!
//! Authentication/session core of a patient-care portal: credential
//! verification over a fixed record set, a single persisted client
//! session, and role-guarded portal routes.
//!
//! ## Architecture
//!
//! - **domain**: Identity, Role and the error taxonomy
//! - **auth**: verifier, session store trait, auth service, route guard
//! - **infrastructure**: session stores (file, memory) and credential
//!   sources (compiled-in list, database table)
//! - **interfaces**: REST API with Swagger documentation
//!
//! The verifier intentionally compares plaintext passwords for demo
//! parity with the portal it models. Not production credential
//! handling.

pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;

pub use config::{default_config_path, AppConfig};

// Re-export the pieces main wires together
pub use auth::{AuthService, MalformedSessionPolicy, Verifier};
pub use infrastructure::{init_database, DatabaseConfig};
pub use interfaces::http::create_router;
