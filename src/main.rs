// src/main.rs

// Modules defined in the crate — the library facade exercises the full
// surface; the binary only drives the create-page path.
mod api;
mod config;
#[allow(dead_code)]
mod constants;
#[allow(dead_code)]
mod error;
#[allow(dead_code)]
mod model;
#[allow(dead_code)]
mod types;

use crate::api::{NotionHttpClient, NotionWriter};
use crate::config::{ClientConfig, CommandLineInput};
use crate::error::AppError;
use crate::model::{CreatePageRequest, PageRequestBuilder, PageResponse};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

/// Sets up logging configuration once, during process bootstrap.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .build(Root::builder().appender("stdout").build(log_level))?;

    log4rs::init_config(config)?;
    Ok(())
}

/// Builds the page-creation request from resolved configuration.
fn build_request(config: &ClientConfig) -> Result<CreatePageRequest, AppError> {
    let mut builder =
        PageRequestBuilder::new(config.database_id.clone(), config.title.clone())
            .tags(config.tags.iter().cloned())
            .archived(config.archived);

    if let Some(url) = &config.source_url {
        builder = builder.source_url(url.clone());
    }

    Ok(builder.build()?)
}

/// Creates one page in the configured database and prints the response.
async fn create_page(config: &ClientConfig) -> Result<PageResponse, AppError> {
    let request = build_request(config)?;
    log::debug!(
        "Request body: {}",
        serde_json::to_string_pretty(&request)
            .unwrap_or_else(|_| "Failed to serialize".to_string())
    );

    let client = NotionHttpClient::new(&config.api_key)?;
    let response = client.create_page(&request).await;

    if let Err(AppError::NotionService { code, .. }) = &response {
        if code.is_transient() {
            log::warn!("The service error is transient; re-running may succeed.");
        }
    }

    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).map_err(|e| anyhow::anyhow!("logging setup failed: {}", e))?;

    let config = ClientConfig::resolve(cli)?;

    log::info!(
        "Creating page '{}' in database {}",
        config.title,
        config.database_id
    );

    let page = create_page(&config).await?;

    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
