//! Command implementations for the usercrud CLI

pub mod serve;

pub use serve::run_serve;
