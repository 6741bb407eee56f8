//! Session store implementations
//!
//! The persisted value is the Identity JSON under one fixed location:
//! a single file for the durable store, a single map key for the
//! in-memory store. Whatever is found there on restore is trusted
//! verbatim; bytes that fail to decode surface as `MalformedSession`
//! and the service applies its configured policy.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::auth::SessionStore;
use crate::domain::{AuthError, AuthResult, Identity};

/// Fixed storage key for the single session entry.
const SESSION_KEY: &str = "user";

/// Durable session store: one JSON file at a fixed path.
///
/// Concurrent processes sharing the path race last-writer-wins; there
/// is no locking, matching the single-key storage model.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the platform data dir,
    /// e.g. `~/.local/share/careportal/session.json`.
    pub fn default_path() -> PathBuf {
        dirs_next::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("careportal")
            .join("session.json")
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn restore(&self) -> AuthResult<Option<Identity>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AuthError::SessionStorage(e.to_string())),
        };
        match serde_json::from_slice(&bytes) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => Err(AuthError::MalformedSession(e.to_string())),
        }
    }

    async fn persist(&self, identity: &Identity) -> AuthResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AuthError::SessionStorage(e.to_string()))?;
        }
        let json = serde_json::to_vec(identity)
            .map_err(|e| AuthError::SessionStorage(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| AuthError::SessionStorage(e.to_string()))
    }

    async fn clear(&self) -> AuthResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::SessionStorage(e.to_string())),
        }
    }
}

/// In-memory session store for tests and ephemeral deployments.
pub struct MemorySessionStore {
    entries: DashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Write a raw value under the session key, bypassing serialization.
    ///
    /// The storage key is writable by anything sharing the store, so
    /// restore must cope with arbitrary bytes; tests use this to plant
    /// malformed blobs.
    pub fn put_raw(&self, value: impl Into<String>) {
        self.entries.insert(SESSION_KEY.to_string(), value.into());
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn restore(&self) -> AuthResult<Option<Identity>> {
        let Some(raw) = self.entries.get(SESSION_KEY) else {
            return Ok(None);
        };
        match serde_json::from_str(raw.value()) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => Err(AuthError::MalformedSession(e.to_string())),
        }
    }

    async fn persist(&self, identity: &Identity) -> AuthResult<()> {
        let json = serde_json::to_string(identity)
            .map_err(|e| AuthError::SessionStorage(e.to_string()))?;
        self.entries.insert(SESSION_KEY.to_string(), json);
        Ok(())
    }

    async fn clear(&self) -> AuthResult<()> {
        self.entries.remove(SESSION_KEY);
        Ok(())
    }
}
