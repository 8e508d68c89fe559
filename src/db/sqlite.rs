use crate::db::models::DbAdmin;
use crate::db::schema::SQLITE_INIT;
use crate::error::SetupError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct AdminStorage {
    pool: SqlitePool,
}

impl AdminStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database file at `path`. With `create` unset a missing file is an error.
    ///
    /// The pool holds a single connection so concurrent setup submissions are
    /// serialized at the storage layer.
    pub async fn open(path: &Path, create: bool) -> Result<Self, SetupError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(create);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), SetupError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn count_admins(&self) -> Result<i64, SetupError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// Insert the first administrator. Returns the row id.
    ///
    /// The count and the insert share one transaction; if any admin exists by
    /// then the insert is skipped and `AlreadyConfigured` is returned.
    pub async fn insert_first_admin(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<i64, SetupError> {
        let mut tx = self.pool.begin().await?;

        let existing: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admins")
            .fetch_one(&mut *tx)
            .await?;
        if existing.0 > 0 {
            tx.rollback().await?;
            return Err(SetupError::AlreadyConfigured);
        }

        let id = sqlx::query("INSERT INTO admins (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        tx.commit().await?;
        Ok(id)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<DbAdmin>, SetupError> {
        let admin = sqlx::query_as::<_, DbAdmin>(
            "SELECT id, username, password_hash, created_at FROM admins WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(admin)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn scratch() -> (tempfile::TempDir, AdminStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = AdminStorage::open(&dir.path().join("admins.db"), true)
            .await
            .unwrap();
        storage.init_schema().await.unwrap();
        (dir, storage)
    }

    #[tokio::test]
    async fn schema_init_is_idempotent() {
        let (_dir, storage) = scratch().await;
        storage.init_schema().await.unwrap();
        assert_eq!(storage.count_admins().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn open_without_create_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let res = AdminStorage::open(&dir.path().join("absent.db"), false).await;
        assert!(matches!(res, Err(SetupError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn first_admin_is_inserted_once() {
        let (_dir, storage) = scratch().await;

        let id = storage.insert_first_admin("editor", "$argon2id$x").await.unwrap();
        assert_eq!(id, 1);

        let second = storage.insert_first_admin("someone", "$argon2id$y").await;
        assert!(matches!(second, Err(SetupError::AlreadyConfigured)));
        assert_eq!(storage.count_admins().await.unwrap(), 1);

        let admin = storage.get_by_username("editor").await.unwrap().unwrap();
        assert_eq!(admin.id, 1);
        assert_eq!(admin.password_hash, "$argon2id$x");
        assert!(storage.get_by_username("someone").await.unwrap().is_none());
    }
}
