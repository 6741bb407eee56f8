//! Credential source implementations

pub mod database;
pub mod memory;

pub use database::DbCredentials;
pub use memory::{demo_accounts, MemoryCredentials};
