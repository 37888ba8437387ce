// src/lib.rs
//! notion_toolkit library — typed request bodies for the Notion API
//! write path, plus the HTTP client that sends them.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration** — `ClientConfig`
//! - **Schema model** — `RichText`, `Mention`, `PropertyValue`, `Parent`,
//!   `CreatePageRequest`, `PageResponse`
//! - **Domain types** — `ApiKey`, `DatabaseId`, `PageId`, `Color`, etc.
//! - **API client** — `NotionWriter`, `NotionHttpClient`

// Internal modules — must match what's in main.rs
mod api;
mod config;
mod constants;
mod error;
mod model;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{ClientConfig, CommandLineInput};

// --- Schema Model ---
pub use crate::model::{
    Annotations, CreatePageRequest, DatabaseRef, DateValue, EquationObject, ExternalFile,
    FileObject, FormulaResult, HostedFile, Icon, Link, Mention, MentionKind, PageProperty,
    PageRef, PageRequestBuilder, PageResponse, Parent, PropertyFile, PropertyValue, RichText,
    RichTextContent, RollupResult, RollupValue, SelectOption, SourceKind, TemplateMention,
    TemplateMentionDate, TemplateMentionUser, TextObject, UniqueIdValue, UserRef,
};

// --- Domain Types ---
pub use crate::types::{
    ApiKey, BlockId, Color, DatabaseId, EmailAddress, NotionId, PageId, PropertyName, UserId,
    ValidatedUrl,
};

// --- API Client ---
pub use crate::api::{ApiResponse, NotionHttpClient, NotionWriter};

// --- Limits ---
pub use crate::constants::{
    EQUATION_EXPRESSION_MAX_CHARS, LINK_URL_MAX_CHARS, MULTI_SELECT_MAX_ITEMS,
    RICH_TEXT_ARRAY_MAX_ITEMS, TEXT_CONTENT_MAX_CHARS,
};
