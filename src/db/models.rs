use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct DbAdmin {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// A validated administrator that has not been stored yet.
#[derive(Clone, PartialEq, Eq)]
pub struct NewAdmin {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for NewAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAdmin")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
