use std::fs::DirBuilder;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::auth::hash_password;
use crate::config::StorageConfig;
use crate::db::{AdminStorage, NewAdmin};
use crate::error::SetupError;

pub const UPLOAD_DIR_MODE: u32 = 0o755;

/// Runs the setup procedure against the configured database and upload paths.
#[derive(Debug, Clone)]
pub struct SetupService {
    database_path: PathBuf,
    upload_dir: PathBuf,
}

impl SetupService {
    pub fn new(database_path: impl Into<PathBuf>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            upload_dir: upload_dir.into(),
        }
    }

    pub fn from_config(cfg: &StorageConfig) -> Self {
        Self::new(&cfg.database_path, &cfg.upload_dir)
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Create the schema, the uploads directory and the first administrator.
    /// Returns the new admin's row id.
    pub async fn run(&self, admin: &NewAdmin) -> Result<i64, SetupError> {
        if let Some(parent) = self.database_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let storage = AdminStorage::open(&self.database_path, true).await?;
        let result = self.provision(&storage, admin).await;
        storage.close().await;
        let id = result?;

        info!(
            id,
            username = %admin.username,
            database = %self.database_path.display(),
            "first administrator created"
        );
        Ok(id)
    }

    async fn provision(&self, storage: &AdminStorage, admin: &NewAdmin) -> Result<i64, SetupError> {
        storage.init_schema().await?;
        create_upload_dir(&self.upload_dir)?;

        let password_hash = hash_password(&admin.password)?;
        storage
            .insert_first_admin(&admin.username, &password_hash)
            .await
    }
}

fn create_upload_dir(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(UPLOAD_DIR_MODE);
    }
    builder.create(path)?;
    info!(path = %path.display(), "created uploads directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;

    fn admin() -> NewAdmin {
        NewAdmin {
            username: "editor".into(),
            password: "s3cretpass".into(),
        }
    }

    #[tokio::test]
    async fn run_creates_database_uploads_and_admin() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("data").join("magazine.db");
        let uploads = dir.path().join("public").join("uploads");
        let service = SetupService::new(&db_path, &uploads);

        let id = service.run(&admin()).await.unwrap();
        assert_eq!(id, 1);
        assert!(db_path.is_file());
        assert!(uploads.is_dir());

        let storage = AdminStorage::open(&db_path, false).await.unwrap();
        let stored = storage.get_by_username("editor").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "s3cretpass");
        assert!(verify_password(&stored.password_hash, "s3cretpass").unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn uploads_directory_gets_0755() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        let service = SetupService::new(dir.path().join("magazine.db"), &uploads);
        service.run(&admin()).await.unwrap();

        // umask can only clear bits
        let mode = std::fs::metadata(&uploads).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & !UPLOAD_DIR_MODE, 0);
    }

    #[tokio::test]
    async fn existing_uploads_directory_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        std::fs::create_dir(&uploads).unwrap();
        std::fs::write(uploads.join("cover.jpg"), b"jpeg").unwrap();

        let service = SetupService::new(dir.path().join("magazine.db"), &uploads);
        service.run(&admin()).await.unwrap();
        assert!(uploads.join("cover.jpg").exists());
    }

    #[tokio::test]
    async fn second_run_reports_already_configured() {
        let dir = tempfile::tempdir().unwrap();
        let service = SetupService::new(dir.path().join("magazine.db"), dir.path().join("uploads"));
        service.run(&admin()).await.unwrap();

        let again = service.run(&admin()).await;
        assert!(matches!(again, Err(SetupError::AlreadyConfigured)));
    }

    #[tokio::test]
    async fn uploads_path_blocked_by_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        std::fs::write(&uploads, b"not a directory").unwrap();

        let service = SetupService::new(dir.path().join("magazine.db"), &uploads);
        let res = service.run(&admin()).await;
        assert!(matches!(res, Err(SetupError::Io(_))));
    }
}
