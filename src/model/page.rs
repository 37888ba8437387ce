// src/model/page.rs
//! Page aggregates: the parent reference, the page-creation request,
//! the server's page response, and the builder that assembles a
//! request for the source-tracking database.
//!
//! Request and response are two distinct types. The request has no id,
//! timestamps, or URLs — those are server-assigned and unconstructable
//! here. The response requires them all; `into_request` is the one-way
//! conversion back.

use crate::model::common::{FileObject, Icon, UserRef};
use crate::model::properties::PropertyValue;
use crate::model::rich_text::{Annotations, Link, RichText};
use crate::types::{BlockId, DatabaseId, PageId, PropertyName, ValidatedUrl, ValidationError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the container a page belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Parent {
    #[serde(rename = "page_id")]
    Page { page_id: PageId },
    #[serde(rename = "database_id")]
    Database { database_id: DatabaseId },
    #[serde(rename = "block_id")]
    Block { block_id: BlockId },
    #[serde(rename = "workspace")]
    Workspace { workspace: bool },
}

impl Parent {
    pub fn database(database_id: DatabaseId) -> Self {
        Self::Database { database_id }
    }

    pub fn page(page_id: PageId) -> Self {
        Self::Page { page_id }
    }

    pub fn block(block_id: BlockId) -> Self {
        Self::Block { block_id }
    }

    pub fn workspace() -> Self {
        Self::Workspace { workspace: true }
    }
}

/// A page-creation request body, ready for `POST /v1/pages`.
///
/// The property mapping preserves insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: IndexMap<PropertyName, PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<FileObject>,
}

/// A property value in a response, wrapped with its server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageProperty {
    pub id: String,
    #[serde(flatten)]
    pub value: PropertyValue,
}

/// A fully populated page, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    /// Always "page".
    pub object: String,
    pub id: PageId,
    pub created_time: chrono::DateTime<chrono::Utc>,
    pub created_by: UserRef,
    pub last_edited_time: chrono::DateTime<chrono::Utc>,
    pub last_edited_by: UserRef,
    pub archived: bool,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub cover: Option<FileObject>,
    pub properties: IndexMap<PropertyName, PageProperty>,
    pub parent: Parent,
    pub url: ValidatedUrl,
    #[serde(default)]
    pub public_url: Option<ValidatedUrl>,
}

impl PageResponse {
    /// Drop every server-assigned field, leaving the request that would
    /// recreate this page.
    pub fn into_request(self) -> CreatePageRequest {
        CreatePageRequest {
            parent: self.parent,
            properties: self
                .properties
                .into_iter()
                .map(|(name, property)| (name, property.value))
                .collect(),
            icon: self.icon,
            cover: self.cover,
        }
    }
}

/// The kind of source a tracked page points at — the `Source_Type`
/// select vocabulary of the target database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Webpage,
    Video,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Webpage => "webpage",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Property slots of the source-tracking database.
const TITLE_SLOT: &str = "Name";
const ARCHIVED_SLOT: &str = "Archived";
const TAGS_SLOT: &str = "Tags";
const SOURCE_TYPE_SLOT: &str = "Source_Type";
const URL_SLOT: &str = "URL";

/// Default page icon for tracked sources.
const DEFAULT_ICON: &str = "🎥";

/// Assembles a complete `CreatePageRequest` for the source-tracking
/// database from a minimal set of caller-supplied fields.
///
/// Pure and synchronous: build either returns a well-formed request or
/// a validation error, never a partial value.
#[derive(Debug, Clone)]
pub struct PageRequestBuilder {
    database_id: DatabaseId,
    title: String,
    text_link: Option<Link>,
    annotations: Annotations,
    archived: bool,
    source_kind: SourceKind,
    tags: Vec<String>,
    source_url: Option<ValidatedUrl>,
    icon: Icon,
}

impl PageRequestBuilder {
    pub fn new(database_id: DatabaseId, title: impl Into<String>) -> Self {
        Self {
            database_id,
            title: title.into(),
            text_link: None,
            annotations: Annotations::default(),
            archived: false,
            source_kind: SourceKind::default(),
            tags: Vec::new(),
            source_url: None,
            icon: Icon::emoji(DEFAULT_ICON),
        }
    }

    /// Inline link wrapped around the title text.
    pub fn text_link(mut self, link: Link) -> Self {
        self.text_link = Some(link);
        self
    }

    /// Styling flags applied to the title text.
    pub fn annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn source_kind(mut self, kind: SourceKind) -> Self {
        self.source_kind = kind;
        self
    }

    /// Tag names for the multi-select slot. Order and duplicates are
    /// kept as given; whether a name exists in the database schema is a
    /// server-side concern.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn source_url(mut self, url: ValidatedUrl) -> Self {
        self.source_url = Some(url);
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Produce the request envelope, validating every field.
    pub fn build(self) -> Result<CreatePageRequest, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }

        let title_text =
            RichText::text(self.title, self.text_link)?.with_annotations(self.annotations);

        let mut properties: IndexMap<PropertyName, PropertyValue> = IndexMap::new();
        properties.insert(
            PropertyName::from(TITLE_SLOT),
            PropertyValue::title(vec![title_text])?,
        );
        properties.insert(
            PropertyName::from(ARCHIVED_SLOT),
            PropertyValue::checkbox(self.archived),
        );
        properties.insert(
            PropertyName::from(TAGS_SLOT),
            PropertyValue::multi_select(self.tags)?,
        );
        properties.insert(
            PropertyName::from(SOURCE_TYPE_SLOT),
            PropertyValue::select(self.source_kind.as_str()),
        );
        properties.insert(
            PropertyName::from(URL_SLOT),
            PropertyValue::url(self.source_url),
        );

        Ok(CreatePageRequest {
            parent: Parent::database(self.database_id),
            properties,
            icon: Some(self.icon),
            cover: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::common::SelectOption;
    use crate::model::properties::PropertyValue;
    use crate::model::rich_text::RichTextContent;

    fn test_database_id() -> DatabaseId {
        DatabaseId::parse("54ab647b7e4949d4972d4d5ede8b48ce").unwrap()
    }

    #[test]
    fn minimal_build_fills_every_slot() {
        let request = PageRequestBuilder::new(test_database_id(), "test_123")
            .build()
            .unwrap();

        assert_eq!(
            request.parent,
            Parent::database(test_database_id())
        );

        let slots: Vec<&str> = request.properties.keys().map(|k| k.as_str()).collect();
        assert_eq!(slots, vec!["Name", "Archived", "Tags", "Source_Type", "URL"]);

        let PropertyValue::Title { title } = &request.properties["Name"] else {
            panic!("Name slot must be a title property");
        };
        assert_eq!(title.len(), 1);
        let RichTextContent::Text { text } = &title[0].content else {
            panic!("title must hold a text rich-text object");
        };
        assert_eq!(text.content, "test_123");
        assert_eq!(title[0].plain_text, "test_123");

        assert_eq!(
            request.properties["Archived"],
            PropertyValue::Checkbox { checkbox: false }
        );
        assert_eq!(
            request.properties["Tags"],
            PropertyValue::MultiSelect {
                multi_select: vec![]
            }
        );
        let PropertyValue::Select { select: Some(option) } = &request.properties["Source_Type"]
        else {
            panic!("Source_Type slot must be a populated select");
        };
        assert_eq!(option, &SelectOption::named("webpage"));
        assert_eq!(
            request.properties["URL"],
            PropertyValue::Url { url: None }
        );
    }

    #[test]
    fn empty_title_fails_without_partial_output() {
        let result = PageRequestBuilder::new(test_database_id(), "").build();
        assert!(matches!(result, Err(ValidationError::EmptyField("title"))));

        let result = PageRequestBuilder::new(test_database_id(), "   ").build();
        assert!(matches!(result, Err(ValidationError::EmptyField("title"))));
    }

    #[test]
    fn tags_keep_order_and_duplicates() {
        let request = PageRequestBuilder::new(test_database_id(), "tagged")
            .tags(["a", "b", "a"])
            .build()
            .unwrap();
        let PropertyValue::MultiSelect { multi_select } = &request.properties["Tags"] else {
            panic!("Tags slot must be a multi_select property");
        };
        let names: Vec<&str> = multi_select.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
    }

    #[test]
    fn default_icon_is_camera() {
        let request = PageRequestBuilder::new(test_database_id(), "with icon")
            .build()
            .unwrap();
        assert_eq!(request.icon, Some(Icon::emoji("🎥")));
    }

    #[test]
    fn workspace_parent_carries_flag() {
        let json = serde_json::to_value(Parent::workspace()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "workspace", "workspace": true })
        );
    }

    #[test]
    fn database_parent_wire_shape() {
        let json = serde_json::to_value(Parent::database(test_database_id())).unwrap();
        assert_eq!(json["type"], "database_id");
        assert_eq!(json["database_id"], "54ab647b7e4949d4972d4d5ede8b48ce");
    }
}
