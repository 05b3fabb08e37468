/// Data models for database entities
///
/// All models map to database tables and use sqlx for type-safe queries.

use crate::catalog::WatchStatus;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A title in the catalog with its current status
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CatalogEntry {
    pub title: String,
    pub status: String,     // 'wanted', 'seen', 'disliked'
    pub updated_at: String, // RFC 3339
    pub revision: i64,
}

impl CatalogEntry {
    /// Parsed status. Rows are constrained by the schema, anything else reads as wanted.
    pub fn watch_status(&self) -> WatchStatus {
        self.status.parse().unwrap_or(WatchStatus::Wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(status: &str) -> CatalogEntry {
        CatalogEntry {
            title: "Heat".to_string(),
            status: status.to_string(),
            updated_at: "2026-10-18T00:00:00Z".to_string(),
            revision: 1,
        }
    }

    #[test]
    fn test_watch_status() {
        assert_eq!(entry("seen").watch_status(), WatchStatus::Seen);
        assert_eq!(entry("disliked").watch_status(), WatchStatus::Disliked);
        assert_eq!(entry("garbage").watch_status(), WatchStatus::Wanted);
    }

    #[test]
    fn test_entry_serializes() {
        let json = serde_json::to_value(entry("seen")).unwrap();
        assert_eq!(json["title"], "Heat");
        assert_eq!(json["status"], "seen");
    }
}
