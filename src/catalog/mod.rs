/// Catalog storage abstraction
///
/// The interpreter and the tools only ever talk to storage through the
/// [`Catalog`] trait: one upsert per action and a read-only listing per status.

pub mod memory;

use crate::db::Database;
use crate::error::{CinelistError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use memory::MemoryCatalog;

/// One of the three watch-list states a title can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    Wanted,
    Seen,
    Disliked,
}

impl WatchStatus {
    pub const ALL: [WatchStatus; 3] = [WatchStatus::Wanted, WatchStatus::Seen, WatchStatus::Disliked];

    /// Stable storage code
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::Wanted => "wanted",
            WatchStatus::Seen => "seen",
            WatchStatus::Disliked => "disliked",
        }
    }
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict parse: only the three canonical codes, any casing
impl FromStr for WatchStatus {
    type Err = CinelistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "wanted" => Ok(WatchStatus::Wanted),
            "seen" => Ok(WatchStatus::Seen),
            "disliked" => Ok(WatchStatus::Disliked),
            _ => Err(CinelistError::InvalidStatus(s.to_string())),
        }
    }
}

/// Storage collaborator consumed by the orchestrator and the tools.
///
/// `upsert` must be idempotent on case-insensitive title identity: a second
/// upsert of the same title replaces the previous status.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn upsert(&self, title: &str, status: WatchStatus) -> Result<()>;

    /// Titles currently in `status`, most recently modified first
    async fn list_by_status(&self, status: WatchStatus) -> Result<Vec<String>>;
}

#[async_trait]
impl Catalog for Database {
    async fn upsert(&self, title: &str, status: WatchStatus) -> Result<()> {
        self.upsert_entry(title, status).await
    }

    async fn list_by_status(&self, status: WatchStatus) -> Result<Vec<String>> {
        let entries = self.get_entries_by_status(status).await?;
        Ok(entries.into_iter().map(|e| e.title).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(WatchStatus::Wanted.to_string(), "wanted");
        assert_eq!(WatchStatus::Seen.to_string(), "seen");
        assert_eq!(WatchStatus::Disliked.to_string(), "disliked");
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("SEEN".parse::<WatchStatus>().unwrap(), WatchStatus::Seen);
        assert_eq!(" disliked ".parse::<WatchStatus>().unwrap(), WatchStatus::Disliked);

        match "déjà vu".parse::<WatchStatus>() {
            Err(CinelistError::InvalidStatus(s)) => assert_eq!(s, "déjà vu"),
            other => panic!("Expected InvalidStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_database_as_catalog() {
        let db = Database::new_test().await.unwrap();
        let catalog: &dyn Catalog = &db;

        catalog.upsert("Drive", WatchStatus::Wanted).await.unwrap();
        catalog.upsert("drive", WatchStatus::Seen).await.unwrap();

        assert!(catalog.list_by_status(WatchStatus::Wanted).await.unwrap().is_empty());
        assert_eq!(
            catalog.list_by_status(WatchStatus::Seen).await.unwrap(),
            vec!["drive".to_string()]
        );
    }
}
