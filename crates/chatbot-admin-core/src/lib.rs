//! # Chatbot Admin Core
//!
//! Shared, I/O-free logic for Chatbot Admin: the knowledge and pattern
//! records, their ordering contract, the store abstraction, and the
//! keyword intent router.
//!
//! This crate contains no tokio, sqlx, HTTP, or filesystem dependencies.

pub mod intent;
pub mod models;
pub mod store;

pub use intent::{detect_intent, Intent, IntentMatch, IntentRouter, IntentRule};
pub use models::{KnowledgeEntry, LearningPattern};
pub use store::Store;
