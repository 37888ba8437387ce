// src/config.rs
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId, NotionId, ValidatedUrl};
use clap::Parser;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Target database URL or ID (e.g., "https://www.notion.so/...")
    pub database_input: String,

    /// Title of the page to create
    #[arg(long, default_value = "test_123")]
    pub title: String,

    /// Tag to attach to the page's multi-select slot (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Source URL recorded on the page
    #[arg(long)]
    pub source_url: Option<String>,

    /// Create the page with the archived checkbox set
    #[arg(long, default_value_t = false)]
    pub archived: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved client configuration — validated and ready to drive a
/// page-creation call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub database_id: DatabaseId,
    pub title: String,
    pub tags: Vec<String>,
    pub source_url: Option<ValidatedUrl>,
    pub archived: bool,
    pub verbose: bool,
}

impl ClientConfig {
    /// Resolves a complete configuration from CLI input and environment.
    ///
    /// A missing or malformed `NOTION_TOKEN` is fatal here, before any
    /// request is attempted.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key_str = std::env::var("NOTION_TOKEN").map_err(|_| {
            AppError::MissingConfiguration("NOTION_TOKEN environment variable not set".to_string())
        })?;

        let api_key = ApiKey::new(api_key_str)?;
        let database_id = DatabaseId::from_notion_id(&NotionId::parse(&cli.database_input)?);

        let source_url = cli
            .source_url
            .as_deref()
            .map(ValidatedUrl::parse)
            .transpose()?;

        Ok(ClientConfig {
            api_key,
            database_id,
            title: cli.title,
            tags: cli.tags,
            source_url,
            archived: cli.archived,
            verbose: cli.verbose,
        })
    }
}
