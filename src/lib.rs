//! # Chatbot Admin
//!
//! Administration surface for a chatbot: read endpoints for the knowledge
//! base and learned patterns, an intent router for theme commands in English
//! and Vietnamese, and a server-rendered dashboard.
//!
//! ## Architecture
//!
//! ```text
//!  ┌──────────┐    ┌──────────┐    ┌─────────────┐
//!  │   CLI    │───▶│  Store   │◀───│  HTTP (axum) │
//!  │(botadmin)│    │  SQLite  │    │ JSON + HTML  │
//!  └────┬─────┘    └──────────┘    └──────┬──────┘
//!       │                                 │
//!       └──────────▶ IntentRouter ◀───────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`logging`] | `tracing-subscriber` initialisation |
//! | [`db`] | SQLite connection pool with WAL mode |
//! | [`migrate`] | Idempotent schema creation |
//! | [`sqlite_store`] | SQLite [`store::Store`] backend |
//! | [`records`] | CLI seeding and listing of records |
//! | [`intent_cmd`] | CLI router debug harness |
//! | [`components`] | Container/Section markup builders |
//! | [`dashboard`] | Admin dashboard page |
//! | [`server`] | HTTP server (Axum) with CORS and request tracing |
//!
//! Records, the ordering contract, the [`store::Store`] trait and the
//! [`intent`] router live in `chatbot-admin-core` and are re-exported here.

pub mod components;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod intent_cmd;
pub mod logging;
pub mod migrate;
pub mod records;
pub mod server;
pub mod sqlite_store;

pub use chatbot_admin_core::{intent, models, store};
pub use chatbot_admin_core::{detect_intent, Intent, IntentRouter};
