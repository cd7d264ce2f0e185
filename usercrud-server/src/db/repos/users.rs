//! PostgreSQL-backed user store
//!
//! Every statement is parameterized. No transactions: each handler issues its
//! statements independently and the database owns all record state.

use async_trait::async_trait;
use sqlx::PgPool;

use super::UserStore;
use crate::models::{User, UserId, UserPayload};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Raw driver error; its text is what clients see on a 500
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}

/// User store over a shared connection pool
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email, created_at FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create(&self, payload: &UserPayload) -> Result<User, DbError> {
        // RETURNING hands back the stored row, server defaults included
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email) VALUES ($1, $2)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn update(&self, id: UserId, payload: &UserPayload) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: UserId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
