//! Storage abstraction for Chatbot Admin.
//!
//! The [`Store`] trait is the repository boundary behind the admin read
//! endpoints, so the query and ordering contract can be exercised without a
//! real database. Backends: SQLite (in the application crate) and
//! [`memory::InMemoryStore`].
//!
//! Implementations must be `Send + Sync` to be shared across request tasks.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{KnowledgeEntry, LearningPattern};

/// Abstract record store.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`list_knowledge`](Store::list_knowledge) | All knowledge entries, usage desc then newest first |
/// | [`list_patterns`](Store::list_patterns) | All learning patterns, success desc then newest first |
/// | [`insert_knowledge`](Store::insert_knowledge) | Add a knowledge entry |
/// | [`insert_pattern`](Store::insert_pattern) | Add a learning pattern |
#[async_trait]
pub trait Store: Send + Sync {
    /// Every knowledge entry, ordered by `usage_count` desc then `created_at` desc.
    async fn list_knowledge(&self) -> Result<Vec<KnowledgeEntry>>;

    /// Every learning pattern, ordered by `success_count` desc then `created_at` desc.
    async fn list_patterns(&self) -> Result<Vec<LearningPattern>>;

    async fn insert_knowledge(&self, entry: &KnowledgeEntry) -> Result<()>;

    async fn insert_pattern(&self, pattern: &LearningPattern) -> Result<()>;
}
