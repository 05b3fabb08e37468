// In-process catalog
//
// Same semantics as the SQLite catalog, kept in a Vec behind a lock.
// Handy for tests and for running without a database file.

use super::{Catalog, WatchStatus};
use crate::error::{CinelistError, Result};
use async_trait::async_trait;
use std::sync::RwLock;

#[derive(Debug, Clone)]
struct MemoryEntry {
    title: String,
    status: WatchStatus,
}

/// Catalog kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    // oldest modification first
    entries: RwLock<Vec<MemoryEntry>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a title, matched case-insensitively
    pub fn status_of(&self, title: &str) -> Option<WatchStatus> {
        let entries = self.entries.read().ok()?;
        entries
            .iter()
            .find(|e| e.title.to_lowercase() == title.to_lowercase())
            .map(|e| e.status)
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> CinelistError {
    CinelistError::Storage("catalog lock poisoned".to_string())
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn upsert(&self, title: &str, status: WatchStatus) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        let key = title.to_lowercase();

        // Replacing moves the title to the most recent position
        entries.retain(|e| e.title.to_lowercase() != key);
        entries.push(MemoryEntry {
            title: title.to_string(),
            status,
        });

        Ok(())
    }

    async fn list_by_status(&self, status: WatchStatus) -> Result<Vec<String>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;

        Ok(entries
            .iter()
            .rev()
            .filter(|e| e.status == status)
            .map(|e| e.title.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_is_case_insensitive() {
        let catalog = MemoryCatalog::new();

        catalog.upsert("Heat", WatchStatus::Wanted).await.unwrap();
        catalog.upsert("HEAT", WatchStatus::Seen).await.unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.status_of("heat"), Some(WatchStatus::Seen));
        assert_eq!(
            catalog.list_by_status(WatchStatus::Seen).await.unwrap(),
            vec!["HEAT".to_string()]
        );
    }

    #[tokio::test]
    async fn test_list_most_recent_first() {
        let catalog = MemoryCatalog::new();

        catalog.upsert("Alien", WatchStatus::Wanted).await.unwrap();
        catalog.upsert("Heat", WatchStatus::Wanted).await.unwrap();
        catalog.upsert("Dune", WatchStatus::Disliked).await.unwrap();
        catalog.upsert("Alien", WatchStatus::Wanted).await.unwrap();

        let wanted = catalog.list_by_status(WatchStatus::Wanted).await.unwrap();
        assert_eq!(wanted, vec!["Alien".to_string(), "Heat".to_string()]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MemoryCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.status_of("Alien"), None);
    }
}
