//! usercrud-server: HTTP CRUD service over a single `users` table
//!
//! Five routes, each translating a request into one or two parameterized
//! statements and the resulting rows into JSON.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, PgUserStore, UserStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{User, UserId, UserPayload, UserResponse, ValidationError};
