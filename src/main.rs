//! # Chatbot Admin CLI (`botadmin`)
//!
//! ## Usage
//!
//! ```bash
//! botadmin --config ./config/botadmin.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `botadmin init` | Create the SQLite database and schema |
//! | `botadmin serve` | Start the admin HTTP server |
//! | `botadmin intent "<message>"` | Classify a chat message |
//! | `botadmin knowledge list\|add` | List or seed knowledge entries |
//! | `botadmin patterns list\|add` | List or seed learning patterns |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chatbot_admin::config::Config;
use chatbot_admin::{config, intent_cmd, logging, migrate, records, server};
use chatbot_admin_core::intent::IntentRouter;

/// Chatbot Admin CLI: knowledge base and learned pattern administration
/// plus the intent router debug harness.
#[derive(Parser)]
#[command(
    name = "botadmin",
    about = "Chatbot Admin: knowledge and pattern endpoints plus intent routing",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/botadmin.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema. Safe to run repeatedly.
    Init,

    /// Start the admin HTTP server on `[server].bind`.
    Serve,

    /// Classify a chat message and print the intent label.
    ///
    /// Uses `[intent.extra_phrases]` when the config file exists, otherwise
    /// the built-in rules. An existing but invalid config is an error.
    Intent {
        /// The message to classify.
        message: String,

        /// Print the full match as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Manage knowledge base entries.
    Knowledge {
        #[command(subcommand)]
        action: KnowledgeAction,
    },

    /// Manage learning patterns.
    Patterns {
        #[command(subcommand)]
        action: PatternAction,
    },
}

#[derive(Subcommand)]
enum KnowledgeAction {
    /// List entries, most used first.
    List,
    /// Add an entry.
    Add {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
        #[arg(long)]
        category: Option<String>,
        /// Initial usage counter (for imports).
        #[arg(long, default_value_t = 0)]
        usage_count: i64,
    },
}

#[derive(Subcommand)]
enum PatternAction {
    /// List patterns, most successful first.
    List,
    /// Add a pattern.
    Add {
        /// The utterance as a user would type it.
        #[arg(long)]
        pattern: String,
        /// Intent label: dark_mode, light_mode, auto_mode, or theme_menu.
        #[arg(long)]
        intent: String,
        #[arg(long)]
        response: Option<String>,
        /// Initial success counter (for imports).
        #[arg(long, default_value_t = 0)]
        success_count: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let load = || -> anyhow::Result<Config> {
        let cfg = config::load_config(&cli.config)?;
        logging::init(&cfg.logging.level)?;
        Ok(cfg)
    };

    match cli.command {
        Commands::Init => {
            let cfg = load()?;
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Serve => {
            let cfg = load()?;
            server::run_server(&cfg).await?;
        }
        Commands::Intent { message, json } => {
            // The router debug harness works without a config file
            let router = if cli.config.exists() {
                config::load_config(&cli.config)?.intent_router()?
            } else {
                IntentRouter::new()
            };
            intent_cmd::run_intent(&router, &message, json)?;
        }
        Commands::Knowledge { action } => {
            let cfg = load()?;
            match action {
                KnowledgeAction::List => {
                    records::run_knowledge_list(&cfg).await?;
                }
                KnowledgeAction::Add {
                    question,
                    answer,
                    category,
                    usage_count,
                } => {
                    records::run_knowledge_add(&cfg, &question, &answer, category, usage_count)
                        .await?;
                }
            }
        }
        Commands::Patterns { action } => {
            let cfg = load()?;
            match action {
                PatternAction::List => {
                    records::run_pattern_list(&cfg).await?;
                }
                PatternAction::Add {
                    pattern,
                    intent,
                    response,
                    success_count,
                } => {
                    records::run_pattern_add(&cfg, &pattern, &intent, response, success_count)
                        .await?;
                }
            }
        }
    }

    Ok(())
}
