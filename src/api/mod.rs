// src/api/mod.rs
//! HTTP transport facade for the Notion API write path.

pub mod client;
pub mod responses;

pub use client::NotionHttpClient;
pub use responses::ApiResponse;

use crate::error::AppError;
use crate::model::{CreatePageRequest, PageResponse};
use async_trait::async_trait;

/// The seam between request construction and transport.
///
/// The production implementation is [`NotionHttpClient`]; tests
/// substitute a fake to exercise callers without network access.
#[async_trait]
pub trait NotionWriter: Send + Sync {
    /// Create a page from a fully built request, returning the server's
    /// complete page object.
    async fn create_page(&self, request: &CreatePageRequest) -> Result<PageResponse, AppError>;
}
