/// Bulk catalog tools
///
/// For callers that already hold an unambiguous list of titles. No
/// segmentation or classification: the list is split on commas and
/// newlines and every piece goes through the title normalizer.

use crate::catalog::{Catalog, WatchStatus};
use crate::error::Result;
use crate::interpreter::{normalize_status, split_title_list};
use std::sync::Arc;
use tracing::debug;

pub struct BulkTools {
    catalog: Arc<dyn Catalog>,
}

impl BulkTools {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Put every listed title on the wishlist. Returns how many were written.
    pub async fn add_many(&self, titles: &str) -> Result<usize> {
        self.apply_all(titles, WatchStatus::Wanted).await
    }

    /// Take every listed title off the wishlist (marks them disliked)
    pub async fn remove_many(&self, titles: &str) -> Result<usize> {
        self.apply_all(titles, WatchStatus::Disliked).await
    }

    /// Apply one status to every listed title
    ///
    /// The status is resolved leniently: anything unrecognized means wanted.
    pub async fn set_many_status(&self, titles: &str, status: &str) -> Result<(usize, WatchStatus)> {
        let status = normalize_status(status);
        let count = self.apply_all(titles, status).await?;
        Ok((count, status))
    }

    async fn apply_all(&self, titles: &str, status: WatchStatus) -> Result<usize> {
        let titles = split_title_list(titles);

        for title in &titles {
            self.catalog.upsert(title, status).await?;
        }

        debug!(count = titles.len(), status = %status, "Bulk update");
        Ok(titles.len())
    }
}
