//! User repository - sole gateway to the users table
//!
//! Invariants are enforced by the store, not by check-then-act:
//! - create: INSERT and map a unique violation to AlreadyExists
//! - update/delete: zero affected rows means NotFound

use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// User record from the database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("user with ID {id} not found")]
    NotFound { id: i64 },

    #[error("username '{username}' already exists")]
    AlreadyExists { username: String },
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users. Order is store-defined.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username, email FROM users")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, username, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound { id })
    }

    /// Create a user, returning the record with its assigned id.
    ///
    /// Duplicate usernames are rejected by the UNIQUE constraint; the
    /// violation surfaces as `AlreadyExists` and nothing is inserted.
    pub async fn create(&self, username: &str, email: &str) -> Result<User, DbError> {
        let result = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id, username, email",
        )
        .bind(username)
        .bind(email)
        .fetch_one(self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DbError::AlreadyExists {
                    username: username.to_owned(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite both fields of an existing user.
    ///
    /// A zero affected-row count means no row had that id.
    pub async fn update(&self, id: i64, username: &str, email: &str) -> Result<String, DbError> {
        let result = sqlx::query("UPDATE users SET username = $1, email = $2 WHERE id = $3")
            .bind(username)
            .bind(email)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        Ok(format!("User with ID {} successfully updated", id))
    }

    /// Hard-delete a user by id.
    pub async fn delete(&self, id: i64) -> Result<String, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        Ok(format!("User with ID {} successfully deleted", id))
    }
}
