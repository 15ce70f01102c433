//! Records served by the admin endpoints.
//!
//! Both record types share the same lifecycle: an immutable identity, a
//! telemetry counter bumped by the chat runtime, and a creation timestamp.
//! Listing order is always (counter desc, created_at desc); see
//! [`sort_knowledge`] and [`sort_patterns`].

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored question/answer pair with usage telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Number of times the chatbot served this answer.
    pub usage_count: i64,
    pub created_at: DateTime<Utc>,
}

/// A learned utterance pattern with success telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPattern {
    pub id: String,
    /// The utterance as the user phrased it.
    pub pattern: String,
    /// Intent label the pattern resolved to (see [`crate::Intent::label`]).
    pub intent: String,
    #[serde(default)]
    pub response: Option<String>,
    /// Number of times resolving this pattern led to a successful action.
    pub success_count: i64,
    pub created_at: DateTime<Utc>,
}

fn by_counter_then_recency(
    a_count: i64,
    a_created: &DateTime<Utc>,
    b_count: i64,
    b_created: &DateTime<Utc>,
) -> Ordering {
    b_count
        .cmp(&a_count)
        .then_with(|| b_created.cmp(a_created))
}

/// Orders knowledge entries by `usage_count` desc, then `created_at` desc.
pub fn knowledge_order(a: &KnowledgeEntry, b: &KnowledgeEntry) -> Ordering {
    by_counter_then_recency(a.usage_count, &a.created_at, b.usage_count, &b.created_at)
}

/// Orders learning patterns by `success_count` desc, then `created_at` desc.
pub fn pattern_order(a: &LearningPattern, b: &LearningPattern) -> Ordering {
    by_counter_then_recency(
        a.success_count,
        &a.created_at,
        b.success_count,
        &b.created_at,
    )
}

pub fn sort_knowledge(entries: &mut [KnowledgeEntry]) {
    entries.sort_by(knowledge_order);
}

pub fn sort_patterns(patterns: &mut [LearningPattern]) {
    patterns.sort_by(pattern_order);
}
