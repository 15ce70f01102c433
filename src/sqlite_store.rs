//! SQLite-backed [`Store`] implementation.
//!
//! Timestamps are stored as Unix milliseconds; ordering is done by SQLite
//! using the `(counter DESC, created_at DESC)` indexes from [`crate::migrate`].

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use chatbot_admin_core::models::{KnowledgeEntry, LearningPattern};
use chatbot_admin_core::store::Store;

/// SQLite implementation of the [`Store`] trait.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn from_millis(ms: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| anyhow!("created_at out of range: {}", ms))
}

fn knowledge_from_row(row: &SqliteRow) -> Result<KnowledgeEntry> {
    Ok(KnowledgeEntry {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        usage_count: row.get("usage_count"),
        created_at: from_millis(row.get("created_at"))?,
    })
}

fn pattern_from_row(row: &SqliteRow) -> Result<LearningPattern> {
    Ok(LearningPattern {
        id: row.get("id"),
        pattern: row.get("pattern"),
        intent: row.get("intent"),
        response: row.get("response"),
        success_count: row.get("success_count"),
        created_at: from_millis(row.get("created_at"))?,
    })
}

#[async_trait]
impl Store for SqliteStore {
    async fn list_knowledge(&self) -> Result<Vec<KnowledgeEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, usage_count, created_at
            FROM knowledge_entries
            ORDER BY usage_count DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(knowledge_from_row).collect()
    }

    async fn list_patterns(&self) -> Result<Vec<LearningPattern>> {
        let rows = sqlx::query(
            r#"
            SELECT id, pattern, intent, response, success_count, created_at
            FROM learning_patterns
            ORDER BY success_count DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(pattern_from_row).collect()
    }

    async fn insert_knowledge(&self, entry: &KnowledgeEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO knowledge_entries (id, question, answer, category, usage_count, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.question)
        .bind(&entry.answer)
        .bind(&entry.category)
        .bind(entry.usage_count)
        .bind(entry.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_pattern(&self, pattern: &LearningPattern) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO learning_patterns (id, pattern, intent, response, success_count, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&pattern.id)
        .bind(&pattern.pattern)
        .bind(&pattern.intent)
        .bind(&pattern.response)
        .bind(pattern.success_count)
        .bind(pattern.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
