//! PostgreSQL Repository Implementation
//!
//! Profile and credential live in one `users` row, so creation is a
//! single atomic insert and the unique index on `email` is the
//! authoritative duplicate check.

use chrono::{DateTime, Utc};
use nid::Nanoid;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, public_id::PublicId, user_id::UserId,
    user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User, credential: &Credential) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                public_id,
                display_name,
                email,
                password_hash,
                password_updated_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.public_id.as_str())
        .bind(user.display_name.as_str())
        .bind(user.email.as_str())
        .bind(credential.password_hash.as_phc_string())
        .bind(credential.password_updated_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::EmailTaken)
            }
            Err(e) => Err(AuthError::Database(e)),
        }
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                public_id,
                display_name,
                email,
                password_hash,
                password_updated_at,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<(User, Credential)>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                public_id,
                display_name,
                email,
                password_hash,
                password_updated_at,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user_with_credential()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    public_id: String,
    display_name: String,
    email: String,
    password_hash: String,
    password_updated_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let public_id = PublicId::from_nanoid(
            Nanoid::from_str(&self.public_id)
                .map_err(|e| AuthError::Internal(format!("Invalid public_id: {}", e)))?,
        );

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            public_id,
            display_name: DisplayName::from_db(self.display_name),
            email: Email::from_db(self.email),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }

    fn into_user_with_credential(self) -> AuthResult<(User, Credential)> {
        let user_id = UserId::from_uuid(self.user_id);
        let password_hash = UserPassword::from_phc_string(&self.password_hash)
            .map_err(|e| AuthError::Internal(e.message().to_string()))?;
        let credential = Credential {
            user_id,
            password_hash,
            password_updated_at: self.password_updated_at,
        };

        let user = self.into_user()?;

        Ok((user, credential))
    }
}
