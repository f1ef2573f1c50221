//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool passed in explicitly - no global session
//! - All list operations use JOINs - no N+1 queries
//! - Rely on DB constraints, handle violations - no check-then-delete
//! - One transaction per write; dropping it uncommitted rolls back

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options, run_migrations, MIGRATOR};
pub use repos::*;
