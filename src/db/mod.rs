//! Database module: the administrator model and schema for the setup store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: `AdminStorage`, the queries the setup flow needs

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbAdmin, NewAdmin};
pub use schema::SQLITE_INIT;
pub use sqlite::{AdminStorage, SqlitePool};
