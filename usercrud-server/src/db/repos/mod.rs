//! User persistence
//!
//! `UserStore` is the seam between HTTP handlers and storage. The router is
//! built with an `Arc<dyn UserStore>`; production uses `PgUserStore`.

pub mod users;

use async_trait::async_trait;

use crate::models::{User, UserId, UserPayload};

pub use users::{DbError, PgUserStore};

/// Storage operations behind the five user routes
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows in storage order.
    async fn list(&self) -> Result<Vec<User>, DbError>;

    /// One row by primary key, `None` when absent.
    async fn get(&self, id: UserId) -> Result<Option<User>, DbError>;

    /// Insert a row and return it as stored (server-assigned id and created_at).
    async fn create(&self, payload: &UserPayload) -> Result<User, DbError>;

    /// Overwrite name and email. Returns rows affected; zero is not an error.
    async fn update(&self, id: UserId, payload: &UserPayload) -> Result<u64, DbError>;

    /// Delete by primary key. Returns rows affected; zero is not an error.
    async fn delete(&self, id: UserId) -> Result<u64, DbError>;
}
