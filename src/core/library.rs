/// Single-title catalog tools
///
/// One title in, one write out. Titles are normalized first and a title
/// that normalizes to nothing is rejected.

use crate::catalog::{Catalog, WatchStatus};
use crate::core::bulk::BulkTools;
use crate::error::{CinelistError, Result};
use crate::interpreter::{normalize_status, normalize_title};
use std::collections::HashSet;
use std::sync::Arc;

/// Outcome of [`LibraryTools::add_to_wishlist`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    /// The input was really a list; this many titles were added
    AddedMany(usize),
}

pub struct LibraryTools {
    catalog: Arc<dyn Catalog>,
}

impl LibraryTools {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Add one title to the wishlist
    ///
    /// Input containing commas or newlines is handed to the bulk path.
    pub async fn add_to_wishlist(&self, title: &str) -> Result<AddOutcome> {
        if title.contains(',') || title.contains('\n') {
            let n = BulkTools::new(Arc::clone(&self.catalog)).add_many(title).await?;
            return Ok(AddOutcome::AddedMany(n));
        }

        let title = self.write(title, WatchStatus::Wanted).await?;
        Ok(AddOutcome::Added(title))
    }

    /// Take a title off the wishlist (it becomes disliked)
    pub async fn remove_from_wishlist(&self, title: &str) -> Result<String> {
        self.write(title, WatchStatus::Disliked).await
    }

    pub async fn mark_seen(&self, title: &str) -> Result<String> {
        self.write(title, WatchStatus::Seen).await
    }

    pub async fn mark_disliked(&self, title: &str) -> Result<String> {
        self.write(title, WatchStatus::Disliked).await
    }

    /// Set any status; unrecognized status words mean wanted
    pub async fn set_status(&self, title: &str, status: &str) -> Result<(String, WatchStatus)> {
        let status = normalize_status(status);
        let title = self.write(title, status).await?;
        Ok((title, status))
    }

    /// Normalized, non-blank, distinct titles for a status word
    pub async fn list_by_status(&self, status: &str) -> Result<Vec<String>> {
        let status = normalize_status(status);
        let mut seen = HashSet::new();

        Ok(self
            .catalog
            .list_by_status(status)
            .await?
            .iter()
            .map(|t| normalize_title(t))
            .filter(|t| !t.is_empty())
            .filter(|t| seen.insert(t.clone()))
            .collect())
    }

    async fn write(&self, title: &str, status: WatchStatus) -> Result<String> {
        let title = normalize_title(title);
        if title.is_empty() {
            return Err(CinelistError::EmptyTitle);
        }

        self.catalog.upsert(&title, status).await?;
        Ok(title)
    }
}
