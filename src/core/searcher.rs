/// Title searcher with fuzzy matching
///
/// Provides fuzzy search across every status of the catalog.

use crate::catalog::{Catalog, WatchStatus};
use crate::error::Result;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::sync::Arc;

/// A matching title with its status and fuzzy score
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub title: String,
    pub status: WatchStatus,
    pub score: i64,
}

/// Handles title searching with fuzzy matching
pub struct Searcher {
    catalog: Arc<dyn Catalog>,
    matcher: SkimMatcherV2,
}

impl Searcher {
    /// Create a new searcher instance
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Search titles with fuzzy matching
    ///
    /// # Arguments
    /// * `query` - Search query
    /// * `limit` - Maximum results to return
    ///
    /// # Returns
    /// * `Ok(Vec<SearchHit>)` - Hits sorted by score, best first
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let mut hits = Vec::new();

        for status in WatchStatus::ALL {
            for title in self.catalog.list_by_status(status).await? {
                if let Some(score) = self.matcher.fuzzy_match(&title, query) {
                    hits.push(SearchHit {
                        title,
                        status,
                        score,
                    });
                }
            }
        }

        // Sort by score (highest first)
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(limit);

        Ok(hits)
    }
}
