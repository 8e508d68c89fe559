use std::path::Path;
use tracing::{debug, warn};

use crate::db::AdminStorage;

/// Whether an administrator already exists in the database at `database_path`.
///
/// A missing file means setup has not run. A file that cannot be opened or
/// queried is treated the same way so the operator can run setup again.
pub async fn is_setup_complete(database_path: &Path) -> bool {
    if !database_path.exists() {
        debug!(path = %database_path.display(), "database file not found; setup pending");
        return false;
    }

    let storage = match AdminStorage::open(database_path, false).await {
        Ok(storage) => storage,
        Err(e) => {
            warn!(path = %database_path.display(), error = %e, "failed to open database; allowing setup");
            return false;
        }
    };

    let complete = match storage.count_admins().await {
        Ok(count) => count > 0,
        Err(e) => {
            warn!(path = %database_path.display(), error = %e, "failed to count admins; allowing setup");
            false
        }
    };
    storage.close().await;
    complete
}
