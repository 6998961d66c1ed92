//! Post-it board and local login demo library
//!
//! This library provides an in-memory catalog of tagged post-its and
//! free-text annotations, plus a single-user credential service backed by a
//! small keyed record store.

mod auth;
mod catalog;
mod cli;
mod config;
mod errors;
mod postit;
mod store;
mod types;
mod user;
mod validation;

// Re-export key components
pub use auth::*;
pub use catalog::*;
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use postit::*;
pub use store::*;
pub use types::*;
pub use user::*;
pub use validation::*;
