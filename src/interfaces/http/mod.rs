//! HTTP REST API interfaces
//!
//! - `common`: response envelope and validated JSON extractor
//! - `handlers`: request handlers (auth, portal, health)
//! - `router`: router wiring with guards and Swagger documentation

pub mod common;
pub mod handlers;
pub mod router;

pub use router::{create_router, HttpState};
