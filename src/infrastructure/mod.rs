//! Infrastructure layer - external concerns
//!
//! Concrete session stores (file, memory) and credential sources
//! (compiled-in list, database table).

pub mod credentials;
pub mod database;
pub mod session;

pub use credentials::{DbCredentials, MemoryCredentials};
pub use database::{init_database, DatabaseConfig};
pub use session::{FileSessionStore, MemorySessionStore};
