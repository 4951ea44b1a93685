//! Database schema for the users table

use sqlx::PgPool;

/// Create the users table if it does not exist.
///
/// The UNIQUE constraint on `username` is load-bearing: the repository
/// relies on the resulting unique-violation error to reject duplicates
/// instead of a separate lookup.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
