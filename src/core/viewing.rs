// Picks what to watch next from the wishlist

use crate::catalog::{Catalog, WatchStatus};
use crate::error::Result;
use crate::interpreter::normalize_title;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickStrategy {
    /// Most recently added
    First,
    #[default]
    Random,
}

impl PickStrategy {
    /// "first" (any casing) picks the most recent entry, anything else is random
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("first") {
            PickStrategy::First
        } else {
            PickStrategy::Random
        }
    }
}

pub struct ViewingTools {
    catalog: Arc<dyn Catalog>,
}

impl ViewingTools {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Next title to watch, or None when the wishlist is empty
    pub async fn pick_next(&self, strategy: PickStrategy) -> Result<Option<String>> {
        let wishlist: Vec<String> = self
            .catalog
            .list_by_status(WatchStatus::Wanted)
            .await?
            .iter()
            .map(|t| normalize_title(t))
            .filter(|t| !t.is_empty())
            .collect();

        let pick = match strategy {
            PickStrategy::First => wishlist.first(),
            PickStrategy::Random => wishlist.choose(&mut rand::thread_rng()),
        };

        Ok(pick.cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    #[tokio::test]
    async fn test_pick_first_is_most_recent() {
        let catalog = Arc::new(MemoryCatalog::new());
        catalog.upsert("Alien", WatchStatus::Wanted).await.unwrap();
        catalog.upsert("Heat", WatchStatus::Wanted).await.unwrap();
        catalog.upsert("Dune", WatchStatus::Seen).await.unwrap();

        let tools = ViewingTools::new(catalog);
        let pick = tools.pick_next(PickStrategy::First).await.unwrap();

        assert_eq!(pick, Some("Heat".to_string()));
    }

    #[tokio::test]
    async fn test_pick_random_from_wishlist() {
        let catalog = Arc::new(MemoryCatalog::new());
        catalog.upsert("Alien", WatchStatus::Wanted).await.unwrap();
        catalog.upsert("\" \"", WatchStatus::Wanted).await.unwrap();
        catalog.upsert("Dune", WatchStatus::Disliked).await.unwrap();

        let tools = ViewingTools::new(catalog);
        for _ in 0..5 {
            let pick = tools.pick_next(PickStrategy::Random).await.unwrap();
            assert_eq!(pick, Some("Alien".to_string()));
        }
    }

    #[tokio::test]
    async fn test_pick_from_empty_wishlist() {
        let tools = ViewingTools::new(Arc::new(MemoryCatalog::new()));
        assert_eq!(tools.pick_next(PickStrategy::Random).await.unwrap(), None);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!(PickStrategy::parse("FIRST"), PickStrategy::First);
        assert_eq!(PickStrategy::parse("random"), PickStrategy::Random);
        assert_eq!(PickStrategy::default(), PickStrategy::Random);
    }
}
