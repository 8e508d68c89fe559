//! SQL DDL executed by the setup procedure. Safe to run repeatedly.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `username` UNIQUE (creates an index implicitly)
/// - `password_hash` PHC string (Argon2id)
/// - `created_at` filled by SQLite at insert time
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS admins (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#;
