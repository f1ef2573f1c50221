//! showbook-server: venues, artists and the shows that book one into the other
//!
//! - [`models`]: form parsing and validation into typed inputs
//! - [`db`]: Postgres pool, migrations and repositories
//! - [`http`]: Axum routes, JSON views and error responses

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, run_migrations, DbError, MIGRATOR};
pub use http::{build_router, run_server, ServerConfig};
