// src/api/client.rs
//! Pure HTTP client wrapper for the Notion API.
//!
//! A thin wrapper around reqwest: authentication headers, versioning,
//! and request dispatch. No retries, no rate limiting, no caching —
//! those belong to the caller or the service.

use crate::error::AppError;
use crate::model::{CreatePageRequest, PageResponse};
use crate::types::ApiKey;
use reqwest::{header, Client, Response};
use serde::Serialize;

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1";

/// A thin wrapper around a reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::NotionWriter for NotionHttpClient {
    async fn create_page(&self, request: &CreatePageRequest) -> Result<PageResponse, AppError> {
        let response = self.post("pages", request).await?;
        let page: PageResponse = super::responses::read_response(response).await?;
        log::info!("Created page {} at {}", page.id.as_str(), page.url);
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiKey;

    #[test]
    fn client_builds_with_valid_key() {
        let key = ApiKey::new_unchecked("secret_abcdefghijklmnopqrs");
        assert!(NotionHttpClient::new(&key).is_ok());
    }

    #[test]
    fn header_rejects_control_characters() {
        let key = ApiKey::new_unchecked("secret_bad\nnewline_key");
        let result = NotionHttpClient::new(&key);
        assert!(matches!(
            result,
            Err(AppError::MissingConfiguration(reason)) if reason.contains("token")
        ));
    }
}
