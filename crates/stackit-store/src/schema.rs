//! Schema definitions and migration utilities.
//!
//! This module provides the embedded SQL schema definition and utilities
//! for applying it at startup.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the forum schema (001_schema.sql).
pub const SCHEMA_MIGRATION: &str = include_str!("../../../migrations/001_schema.sql");

/// Run all pending migrations against the database.
///
/// This function is idempotent - it can be run multiple times safely.
/// Migrations check for existing objects before creating them.
///
/// # Arguments
///
/// * `pool` - Database connection pool
///
/// # Errors
///
/// Returns an error if the migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running schema migration (001_schema.sql)...");
    sqlx::raw_sql(SCHEMA_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Schema migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `questions` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'questions'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_migration_embedded() {
        // Verify the migration SQL is properly embedded
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS questions"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS answers"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS votes"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS notifications"));
    }

    #[test]
    fn test_vote_pair_is_primary_key() {
        // The (user, answer) invariant lives in the schema, not in handlers.
        assert!(SCHEMA_MIGRATION.contains("PRIMARY KEY (user_id, answer_id)"));
    }
}
