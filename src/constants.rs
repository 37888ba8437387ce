// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the documented Notion API limit it
//! enforces. Reading these constants should tell you the story of what
//! the API will and will not accept in a request body.

// ---------------------------------------------------------------------------
// Notion API request-size limits
// ---------------------------------------------------------------------------

/// Maximum characters in the `content` of a text rich-text object.
pub const TEXT_CONTENT_MAX_CHARS: usize = 2000;

/// Maximum characters in the URL of an inline link.
pub const LINK_URL_MAX_CHARS: usize = 2000;

/// Maximum characters in the LaTeX `expression` of an equation object.
pub const EQUATION_EXPRESSION_MAX_CHARS: usize = 1000;

/// Maximum elements in any array of rich-text objects.
pub const RICH_TEXT_ARRAY_MAX_ITEMS: usize = 100;

/// Maximum options in a multi-select property value.
pub const MULTI_SELECT_MAX_ITEMS: usize = 100;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
