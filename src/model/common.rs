// src/model/common.rs
//! Fixed-shape value objects shared across the schema: files, emoji,
//! icons, dates, select options, and user references.

use crate::types::{Color, UserId, ValidatedUrl};
use serde::{Deserialize, Serialize};

/// A Notion-hosted file with a signed, expiring URL.
///
/// Only the server produces these; requests reference external files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: ValidatedUrl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<chrono::DateTime<chrono::Utc>>,
}

/// An externally hosted file referenced by URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: ValidatedUrl,
}

/// File object — either hosted by Notion or referenced externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileObject {
    File { file: HostedFile },
    External { external: ExternalFile },
}

impl FileObject {
    /// Reference an externally hosted file — the only kind a caller can
    /// construct; hosted files are server-assigned.
    pub fn external(url: ValidatedUrl) -> Self {
        Self::External {
            external: ExternalFile { url },
        }
    }
}

/// Page icon — an emoji character or a file object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Icon {
    Emoji { emoji: String },
    File { file: HostedFile },
    External { external: ExternalFile },
}

impl Icon {
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Self::Emoji {
            emoji: emoji.into(),
        }
    }
}

/// Date value with an optional end for ranges.
///
/// Start and end are ISO 8601 strings; the API accepts plain dates or
/// datetimes in the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl DateValue {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
            time_zone: None,
        }
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }
}

/// Select option — requests send only the name; responses carry the
/// server-assigned id and color as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl SelectOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: None,
        }
    }
}

fn user_object_tag() -> String {
    "user".to_string()
}

/// Reference to a user, as used in mentions and actor fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default = "user_object_tag")]
    pub object: String,
    pub id: UserId,
}

impl UserRef {
    pub fn new(id: UserId) -> Self {
        Self {
            object: user_object_tag(),
            id,
        }
    }
}
