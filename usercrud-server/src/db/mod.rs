//! Database layer - connection pool and user store
//!
//! The pool is owned by the caller and handed to `PgUserStore`; handlers only
//! ever see the `UserStore` trait.

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
