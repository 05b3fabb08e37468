/// Catalog housekeeping
///
/// Pruning junk entries, renaming, sorted listings and per-status counts.
/// Everything goes through the two catalog operations.

use crate::catalog::{Catalog, WatchStatus};
use crate::error::{CinelistError, Result};
use crate::interpreter::{normalize_status, normalize_title};
use std::sync::Arc;
use tracing::info;

/// Listing order for [`MaintenanceTools::sorted_by_status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// "desc" (any casing) is descending, everything else ascending
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Per-status counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub wanted: usize,
    pub seen: usize,
    pub disliked: usize,
}

impl CatalogStats {
    pub fn total(&self) -> usize {
        self.wanted + self.seen + self.disliked
    }
}

impl std::fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "total={} | wanted={} | seen={} | disliked={}",
            self.total(),
            self.wanted,
            self.seen,
            self.disliked
        )
    }
}

pub struct MaintenanceTools {
    catalog: Arc<dyn Catalog>,
}

impl MaintenanceTools {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Move entries whose title is blank once normalized (`""`, stray quotes)
    /// out of a list by marking them disliked. Returns how many moved.
    pub async fn prune_blanks(&self, status: &str) -> Result<usize> {
        let status = normalize_status(status);
        let mut pruned = 0;

        for title in self.catalog.list_by_status(status).await? {
            if normalize_title(&title).is_empty() && status != WatchStatus::Disliked {
                self.catalog.upsert(&title, WatchStatus::Disliked).await?;
                pruned += 1;
            }
        }

        info!(pruned, status = %status, "Pruned blank titles");
        Ok(pruned)
    }

    /// Give a title a new name
    ///
    /// The new title takes the old one's status (wanted if the old title is
    /// unknown) and the old title is marked disliked. A change of casing only
    /// respells the entry.
    pub async fn rename(&self, old_title: &str, new_title: &str) -> Result<WatchStatus> {
        let old_title = normalize_title(old_title);
        let new_title = normalize_title(new_title);
        if old_title.is_empty() || new_title.is_empty() {
            return Err(CinelistError::EmptyTitle);
        }

        let status = self
            .find_status(&old_title)
            .await?
            .unwrap_or(WatchStatus::Wanted);

        self.catalog.upsert(&new_title, status).await?;

        // Only the casing changed: same entry
        if old_title.to_lowercase() != new_title.to_lowercase() {
            self.catalog.upsert(&old_title, WatchStatus::Disliked).await?;
        }

        Ok(status)
    }

    /// Current status of a title, matched case-insensitively
    pub async fn find_status(&self, title: &str) -> Result<Option<WatchStatus>> {
        let key = normalize_title(title).to_lowercase();

        for status in WatchStatus::ALL {
            let titles = self.catalog.list_by_status(status).await?;
            if titles.iter().any(|t| normalize_title(t).to_lowercase() == key) {
                return Ok(Some(status));
            }
        }

        Ok(None)
    }

    /// Non-blank titles of a status, sorted case-insensitively
    pub async fn sorted_by_status(&self, status: &str, order: SortOrder) -> Result<Vec<String>> {
        let status = normalize_status(status);

        let mut titles: Vec<String> = self
            .catalog
            .list_by_status(status)
            .await?
            .iter()
            .map(|t| normalize_title(t))
            .filter(|t| !t.is_empty())
            .collect();

        titles.sort_by_key(|t| t.to_lowercase());
        if order == SortOrder::Desc {
            titles.reverse();
        }

        Ok(titles)
    }

    pub async fn stats(&self) -> Result<CatalogStats> {
        Ok(CatalogStats {
            wanted: self.catalog.list_by_status(WatchStatus::Wanted).await?.len(),
            seen: self.catalog.list_by_status(WatchStatus::Seen).await?.len(),
            disliked: self.catalog.list_by_status(WatchStatus::Disliked).await?.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    async fn setup() -> (MaintenanceTools, Arc<MemoryCatalog>) {
        let catalog = Arc::new(MemoryCatalog::new());
        for (title, status) in [
            ("heat", WatchStatus::Wanted),
            ("Alien", WatchStatus::Wanted),
            ("Dune", WatchStatus::Seen),
            ("\"\"", WatchStatus::Wanted),
        ] {
            catalog.upsert(title, status).await.unwrap();
        }
        (MaintenanceTools::new(catalog.clone()), catalog)
    }

    #[tokio::test]
    async fn test_prune_blanks() {
        let (tools, catalog) = setup().await;

        let pruned = tools.prune_blanks("wanted").await.unwrap();

        assert_eq!(pruned, 1);
        assert_eq!(catalog.status_of("\"\""), Some(WatchStatus::Disliked));
        assert_eq!(tools.prune_blanks("wanted").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rename_keeps_status() {
        let (tools, catalog) = setup().await;

        let status = tools.rename("dune", "Dune: Part One").await.unwrap();

        assert_eq!(status, WatchStatus::Seen);
        assert_eq!(catalog.status_of("Dune: Part One"), Some(WatchStatus::Seen));
        assert_eq!(catalog.status_of("Dune"), Some(WatchStatus::Disliked));
    }

    #[tokio::test]
    async fn test_rename_change_of_case_keeps_status() {
        let (tools, catalog) = setup().await;

        let status = tools.rename("heat", "Heat").await.unwrap();

        assert_eq!(status, WatchStatus::Wanted);
        assert_eq!(catalog.status_of("Heat"), Some(WatchStatus::Wanted));
        assert_eq!(
            catalog.list_by_status(WatchStatus::Wanted).await.unwrap()[0],
            "Heat"
        );
        assert!(catalog.list_by_status(WatchStatus::Disliked).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rename_unknown_defaults_to_wanted() {
        let (tools, _catalog) = setup().await;

        let status = tools.rename("Nope", "Still Nope").await.unwrap();
        assert_eq!(status, WatchStatus::Wanted);

        match tools.rename("", "x").await {
            Err(CinelistError::EmptyTitle) => {}
            other => panic!("Expected EmptyTitle, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sorted_by_status() {
        let (tools, _catalog) = setup().await;

        let asc = tools.sorted_by_status("wanted", SortOrder::Asc).await.unwrap();
        assert_eq!(asc, vec!["Alien", "heat"]);

        let desc = tools
            .sorted_by_status("wanted", SortOrder::parse("DESC"))
            .await
            .unwrap();
        assert_eq!(desc, vec!["heat", "Alien"]);
    }

    #[tokio::test]
    async fn test_stats() {
        let (tools, _catalog) = setup().await;

        let stats = tools.stats().await.unwrap();

        assert_eq!(stats.wanted, 3);
        assert_eq!(stats.seen, 1);
        assert_eq!(stats.disliked, 0);
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.to_string(), "total=4 | wanted=3 | seen=1 | disliked=0");
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("whatever"), SortOrder::Asc);
    }
}
