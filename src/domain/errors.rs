use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Uniform login failure. Does not say whether the email or the
    /// password was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Persisted session data present but undecodable.
    #[error("Malformed persisted session: {0}")]
    MalformedSession(String),

    #[error("Session storage error: {0}")]
    SessionStorage(String),

    #[error("Credential source error: {0}")]
    CredentialSource(String),
}

pub type AuthResult<T> = Result<T, AuthError>;
