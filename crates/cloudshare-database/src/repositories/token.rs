//! Authentication token repository implementation.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use cloudshare_core::error::{AppError, ErrorKind};
use cloudshare_core::result::AppResult;
use cloudshare_entity::token::{AuthToken, CreateAuthToken};

/// Repository for authentication token rows.
#[derive(Debug, Clone)]
pub struct AuthTokenRepository {
    pool: PgPool,
}

impl AuthTokenRepository {
    /// Create a new token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a token by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AuthToken>> {
        sqlx::query_as::<_, AuthToken>("SELECT * FROM authtoken WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find token", e))
    }

    /// List all tokens belonging to a user, most recently used first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<AuthToken>> {
        sqlx::query_as::<_, AuthToken>(
            "SELECT * FROM authtoken WHERE user_id = $1 ORDER BY last_activity DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user tokens", e))
    }

    /// List all tokens, most recently used first.
    pub async fn list_all(&self) -> AppResult<Vec<AuthToken>> {
        sqlx::query_as::<_, AuthToken>("SELECT * FROM authtoken ORDER BY last_activity DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tokens", e))
    }

    /// Persist a new token.
    ///
    /// A blank display name is replaced with the placeholder at insert
    /// time, so new rows never violate the name invariant.
    pub async fn create(&self, data: &CreateAuthToken) -> AppResult<AuthToken> {
        let name = match data.name.as_deref() {
            None | Some("") => AuthToken::DEFAULT_NAME,
            Some(name) => name,
        };

        sqlx::query_as::<_, AuthToken>(
            "INSERT INTO authtoken (user_id, login_name, name, token_hash) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.login_name)
        .bind(name)
        .bind(&data.token_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create token", e))
    }

    /// Record activity on a token.
    pub async fn touch_last_activity(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE authtoken SET last_activity = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to touch token", e))?;
        Ok(())
    }

    /// Delete a token.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM authtoken WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete token", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Set blank token names to the placeholder.
    ///
    /// This is the same statement the name-backfill migration runs; it is
    /// exposed here so operators can re-apply it, and it is idempotent:
    /// once no row has an empty or NULL name, re-running affects nothing.
    /// The single UPDATE either fully applies or fails as a whole.
    pub async fn repair_blank_names(&self) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE authtoken SET name = $1 WHERE name = '' OR name IS NULL")
                .bind(AuthToken::DEFAULT_NAME)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to repair token names", e)
                })?;

        let repaired = result.rows_affected();
        if repaired > 0 {
            info!(rows = repaired, "Backfilled blank token names");
        }
        Ok(repaired)
    }
}
