/// SQL query functions for database operations
///
/// All queries use sqlx for type safety.

use crate::catalog::WatchStatus;
use crate::db::models::*;
use crate::db::Database;
use crate::error::{CinelistError, Result};
use chrono::{SecondsFormat, Utc};

impl Database {
    /// Insert a title or replace the status of an existing one
    ///
    /// Identity is the case-insensitive title. The stored spelling follows
    /// the latest write and the revision moves to the top.
    ///
    /// # Arguments
    /// * `title` - Title as the user wrote it
    /// * `status` - New status
    pub async fn upsert_entry(&self, title: &str, status: WatchStatus) -> Result<()> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        sqlx::query(
            r#"
            INSERT INTO catalog (title, status, updated_at, revision)
            VALUES (?, ?, ?, (SELECT COALESCE(MAX(revision), 0) + 1 FROM catalog))
            ON CONFLICT(title) DO UPDATE SET
                title = excluded.title,
                status = excluded.status,
                updated_at = excluded.updated_at,
                revision = excluded.revision
            "#,
        )
        .bind(title)
        .bind(status.as_str())
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Get entries with a given status, most recently modified first
    pub async fn get_entries_by_status(&self, status: WatchStatus) -> Result<Vec<CatalogEntry>> {
        let entries = sqlx::query_as::<_, CatalogEntry>(
            "SELECT * FROM catalog WHERE status = ? ORDER BY revision DESC",
        )
        .bind(status.as_str())
        .fetch_all(self.pool())
        .await?;

        Ok(entries)
    }

    /// Get a single entry by title (case-insensitive)
    pub async fn get_entry(&self, title: &str) -> Result<Option<CatalogEntry>> {
        let entry = sqlx::query_as::<_, CatalogEntry>("SELECT * FROM catalog WHERE title = ?")
            .bind(title)
            .fetch_optional(self.pool())
            .await?;

        Ok(entry)
    }

    /// Like [`Database::get_entry`], but a missing title is an error
    pub async fn require_entry(&self, title: &str) -> Result<CatalogEntry> {
        self.get_entry(title)
            .await?
            .ok_or_else(|| CinelistError::TitleNotFound(title.to_string()))
    }

    /// Get every entry, most recently modified first
    pub async fn all_entries(&self) -> Result<Vec<CatalogEntry>> {
        let entries =
            sqlx::query_as::<_, CatalogEntry>("SELECT * FROM catalog ORDER BY revision DESC")
                .fetch_all(self.pool())
                .await?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_and_get_entry() {
        let db = Database::new_test().await.unwrap();

        db.upsert_entry("Blade Runner 2049", WatchStatus::Wanted)
            .await
            .unwrap();

        let entry = db.get_entry("blade runner 2049").await.unwrap();
        assert!(entry.is_some());

        let entry = entry.unwrap();
        assert_eq!(entry.title, "Blade Runner 2049");
        assert_eq!(entry.watch_status(), WatchStatus::Wanted);
        assert!(entry.revision > 0);
    }

    #[tokio::test]
    async fn test_upsert_replaces_status_and_spelling() {
        let db = Database::new_test().await.unwrap();

        db.upsert_entry("dune", WatchStatus::Wanted).await.unwrap();
        db.upsert_entry("Dune", WatchStatus::Disliked).await.unwrap();

        let all = db.all_entries().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Dune");
        assert_eq!(all[0].status, "disliked");
    }

    #[tokio::test]
    async fn test_entries_by_status_most_recent_first() {
        let db = Database::new_test().await.unwrap();

        for title in ["Alien", "Heat", "Drive"] {
            db.upsert_entry(title, WatchStatus::Wanted).await.unwrap();
        }
        db.upsert_entry("Parasite", WatchStatus::Seen).await.unwrap();
        db.upsert_entry("Alien", WatchStatus::Wanted).await.unwrap();

        let wanted: Vec<String> = db
            .get_entries_by_status(WatchStatus::Wanted)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();

        assert_eq!(wanted, vec!["Alien", "Drive", "Heat"]);
    }

    #[tokio::test]
    async fn test_stats_by_status() {
        let db = Database::new_test().await.unwrap();

        db.upsert_entry("Alien", WatchStatus::Wanted).await.unwrap();
        db.upsert_entry("Heat", WatchStatus::Seen).await.unwrap();
        db.upsert_entry("Dune", WatchStatus::Disliked).await.unwrap();
        db.upsert_entry("Drive", WatchStatus::Seen).await.unwrap();

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.total_entries, 4);
        assert_eq!(stats.wanted, 1);
        assert_eq!(stats.seen, 2);
        assert_eq!(stats.disliked, 1);
    }

    #[tokio::test]
    async fn test_missing_entry() {
        let db = Database::new_test().await.unwrap();
        assert!(db.get_entry("Nope").await.unwrap().is_none());

        match db.require_entry("Nope").await {
            Err(CinelistError::TitleNotFound(title)) => assert_eq!(title, "Nope"),
            other => panic!("Expected TitleNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_require_entry_found() {
        let db = Database::new_test().await.unwrap();
        db.upsert_entry("Heat", WatchStatus::Seen).await.unwrap();

        let entry = db.require_entry("HEAT").await.unwrap();
        assert_eq!(entry.title, "Heat");
        assert_eq!(entry.watch_status(), WatchStatus::Seen);
    }
}
