//! In-memory [`Store`] implementation for tests and embedding.
//!
//! Records live in `Vec`s behind `std::sync::RwLock`. Listing clones and
//! sorts on every call.

use std::sync::RwLock;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::models::{sort_knowledge, sort_patterns, KnowledgeEntry, LearningPattern};

use super::Store;

/// In-memory store.
pub struct InMemoryStore {
    knowledge: RwLock<Vec<KnowledgeEntry>>,
    patterns: RwLock<Vec<LearningPattern>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            knowledge: RwLock::new(Vec::new()),
            patterns: RwLock::new(Vec::new()),
        }
    }

    /// Build a store pre-populated with the given records, in any order.
    pub fn with_records(knowledge: Vec<KnowledgeEntry>, patterns: Vec<LearningPattern>) -> Self {
        Self {
            knowledge: RwLock::new(knowledge),
            patterns: RwLock::new(patterns),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn list_knowledge(&self) -> Result<Vec<KnowledgeEntry>> {
        let mut entries = self
            .knowledge
            .read()
            .map_err(|_| anyhow!("knowledge lock poisoned"))?
            .clone();
        sort_knowledge(&mut entries);
        Ok(entries)
    }

    async fn list_patterns(&self) -> Result<Vec<LearningPattern>> {
        let mut patterns = self
            .patterns
            .read()
            .map_err(|_| anyhow!("patterns lock poisoned"))?
            .clone();
        sort_patterns(&mut patterns);
        Ok(patterns)
    }

    async fn insert_knowledge(&self, entry: &KnowledgeEntry) -> Result<()> {
        self.knowledge
            .write()
            .map_err(|_| anyhow!("knowledge lock poisoned"))?
            .push(entry.clone());
        Ok(())
    }

    async fn insert_pattern(&self, pattern: &LearningPattern) -> Result<()> {
        self.patterns
            .write()
            .map_err(|_| anyhow!("patterns lock poisoned"))?
            .push(pattern.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, usage: i64, secs: i64) -> KnowledgeEntry {
        KnowledgeEntry {
            id: id.to_string(),
            question: "q".to_string(),
            answer: "a".to_string(),
            category: Some("faq".to_string()),
            usage_count: usage,
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    fn pattern(id: &str, success: i64, secs: i64) -> LearningPattern {
        LearningPattern {
            id: id.to_string(),
            pattern: "bật dark mode".to_string(),
            intent: "dark_mode".to_string(),
            response: None,
            success_count: success,
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(store.list_knowledge().await.unwrap().is_empty());
        assert!(store.list_patterns().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_inserted_knowledge_is_listed_sorted() {
        let store = InMemoryStore::new();
        store.insert_knowledge(&entry("low", 1, 500)).await.unwrap();
        store.insert_knowledge(&entry("high", 8, 100)).await.unwrap();
        store.insert_knowledge(&entry("high-new", 8, 200)).await.unwrap();

        let ids: Vec<_> = store
            .list_knowledge()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["high-new", "high", "low"]);
    }

    #[tokio::test]
    async fn test_seeded_patterns_are_listed_sorted() {
        let store = InMemoryStore::with_records(
            Vec::new(),
            vec![pattern("a", 0, 10), pattern("b", 3, 5), pattern("c", 0, 20)],
        );
        let ids: Vec<_> = store
            .list_patterns()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
