//! Database-backed credential source
//!
//! The external-table flavor of the credential source: an exact-match
//! query against the `accounts` table. The core never writes through
//! this path; seeding happens at startup, outside the verifier.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::auth::CredentialSource;
use crate::domain::{AuthError, AuthResult, CredentialRecord, Role};
use crate::infrastructure::database::entities::account;

pub struct DbCredentials {
    db: DatabaseConnection,
}

impl DbCredentials {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> AuthError {
    AuthError::CredentialSource(e.to_string())
}

fn model_to_record(model: account::Model) -> CredentialRecord {
    CredentialRecord {
        id: model.id,
        name: model.name,
        email: model.email,
        password: model.password,
        role: Role::from(model.role.as_str()),
    }
}

#[async_trait]
impl CredentialSource for DbCredentials {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> AuthResult<Option<CredentialRecord>> {
        let model = account::Entity::find()
            .filter(account::Column::Email.eq(email))
            .filter(account::Column::Password.eq(password))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_record))
    }
}
