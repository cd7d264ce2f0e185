//! Domain models
//!
//! Path and body input is decoded into these types before any query runs.
//! Decoding failures surface as ValidationError, never as a panic.

pub mod user;
pub mod validation;

pub use user::{User, UserId, UserPayload, UserResponse};
pub use validation::ValidationError;
