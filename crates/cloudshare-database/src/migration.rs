//! Database migration runner.
//!
//! Migrations live in the workspace `migrations/` directory and run in
//! version order; each one executes inside a transaction on PostgreSQL
//! and is recorded so it is applied exactly once. A failing migration
//! aborts the run before any dependent step executes.

use sqlx::PgPool;
use tracing::info;

use cloudshare_core::error::{AppError, ErrorKind};
use cloudshare_core::result::AppResult;

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!("Running database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations up to date");
    Ok(())
}

/// A migration recorded by the runner.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AppliedMigration {
    /// Migration version (the numeric filename prefix).
    pub version: i64,
    /// Migration description (the filename remainder).
    pub description: String,
    /// Whether the migration completed successfully.
    pub success: bool,
}

/// List the migrations the runner has recorded, in version order.
///
/// Returns an empty list when the runner has never executed against
/// this database.
pub async fn applied_migrations(pool: &PgPool) -> AppResult<Vec<AppliedMigration>> {
    let table_exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = '_sqlx_migrations')",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to check migration history", e)
    })?;

    if !table_exists {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, AppliedMigration>(
        "SELECT version, description, success FROM _sqlx_migrations ORDER BY version",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to read migration history", e)
    })
}
