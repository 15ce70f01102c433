//! Knowledge and pattern record management for the CLI.
//!
//! Seeding and listing go through [`SqliteStore`], so the CLI sees exactly
//! the order the HTTP endpoints serve.
//!
//! ```bash
//! botadmin knowledge add --question "How do I enable dark mode?" --answer "Say 'dark mode'."
//! botadmin knowledge list
//! botadmin patterns add --pattern "bật dark mode" --intent dark_mode
//! botadmin patterns list
//! ```

use anyhow::{bail, Result};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use chatbot_admin_core::intent::Intent;
use chatbot_admin_core::models::{KnowledgeEntry, LearningPattern};
use chatbot_admin_core::store::Store;

use crate::config::Config;
use crate::db;
use crate::sqlite_store::SqliteStore;

/// Validate input and build a fresh knowledge entry (new id, created now).
pub fn new_knowledge_entry(
    question: &str,
    answer: &str,
    category: Option<String>,
    usage_count: i64,
) -> Result<KnowledgeEntry> {
    if question.trim().is_empty() {
        bail!("question must not be empty");
    }
    if answer.trim().is_empty() {
        bail!("answer must not be empty");
    }
    if usage_count < 0 {
        bail!("usage count must be >= 0");
    }

    Ok(KnowledgeEntry {
        id: Uuid::new_v4().to_string(),
        question: question.trim().to_string(),
        answer: answer.trim().to_string(),
        category: category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
        usage_count,
        created_at: Utc::now(),
    })
}

/// Validate input and build a fresh learning pattern.
///
/// `intent` must be a routable label; `unknown` is rejected.
pub fn new_learning_pattern(
    pattern: &str,
    intent: &str,
    response: Option<String>,
    success_count: i64,
) -> Result<LearningPattern> {
    if pattern.trim().is_empty() {
        bail!("pattern must not be empty");
    }
    let intent: Intent = intent.parse()?;
    if intent == Intent::Unknown {
        bail!("a learning pattern cannot resolve to the unknown intent");
    }
    if success_count < 0 {
        bail!("success count must be >= 0");
    }

    Ok(LearningPattern {
        id: Uuid::new_v4().to_string(),
        pattern: pattern.trim().to_string(),
        intent: intent.label().to_string(),
        response: response
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty()),
        success_count,
        created_at: Utc::now(),
    })
}

/// CLI entry point for `botadmin knowledge add`.
pub async fn run_knowledge_add(
    config: &Config,
    question: &str,
    answer: &str,
    category: Option<String>,
    usage_count: i64,
) -> Result<()> {
    let entry = new_knowledge_entry(question, answer, category, usage_count)?;

    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());
    store.insert_knowledge(&entry).await?;
    pool.close().await;

    info!(id = %entry.id, "knowledge entry added");
    println!("added knowledge entry {}", entry.id);
    Ok(())
}

/// CLI entry point for `botadmin patterns add`.
pub async fn run_pattern_add(
    config: &Config,
    pattern: &str,
    intent: &str,
    response: Option<String>,
    success_count: i64,
) -> Result<()> {
    let pattern = new_learning_pattern(pattern, intent, response, success_count)?;

    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());
    store.insert_pattern(&pattern).await?;
    pool.close().await;

    info!(id = %pattern.id, intent = %pattern.intent, "learning pattern added");
    println!("added learning pattern {}", pattern.id);
    Ok(())
}

/// CLI entry point for `botadmin knowledge list`.
pub async fn run_knowledge_list(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());
    let entries = store.list_knowledge().await?;
    pool.close().await;

    if entries.is_empty() {
        println!("No knowledge entries.");
        return Ok(());
    }

    for e in &entries {
        println!(
            "{:>5}  {}  {}  [{}]",
            e.usage_count,
            e.created_at.format("%Y-%m-%d %H:%M:%S"),
            e.question,
            e.category.as_deref().unwrap_or("-")
        );
        println!("       {}", e.answer);
    }
    println!("{} entries", entries.len());
    Ok(())
}

/// CLI entry point for `botadmin patterns list`.
pub async fn run_pattern_list(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());
    let patterns = store.list_patterns().await?;
    pool.close().await;

    if patterns.is_empty() {
        println!("No learning patterns.");
        return Ok(());
    }

    for p in &patterns {
        println!(
            "{:>5}  {}  {:<10}  {}",
            p.success_count,
            p.created_at.format("%Y-%m-%d %H:%M:%S"),
            p.intent,
            p.pattern
        );
    }
    println!("{} patterns", patterns.len());
    Ok(())
}
