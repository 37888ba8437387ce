// src/model/rich_text.rs
//! Rich text objects — the atomic content unit of Notion documents.
//!
//! Every polymorphic shape here is an internally tagged union: the
//! discriminant is fixed by the variant and never settable on its own,
//! so a mismatched tag/payload state cannot be constructed. Length
//! limits are enforced when a value is built, not when it is
//! serialized — a malformed object never exists.

use crate::constants::{
    EQUATION_EXPRESSION_MAX_CHARS, LINK_URL_MAX_CHARS, TEXT_CONTENT_MAX_CHARS,
};
use crate::model::common::{DateValue, UserRef};
use crate::types::{Color, DatabaseId, PageId, UserId, ValidatedUrl, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The information used to style a rich text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub color: Color,
}

/// An inline link inside a text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: ValidatedUrl,
}

impl Link {
    pub fn new(url: &str) -> Result<Self, ValidationError> {
        if url.chars().count() > LINK_URL_MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: "link url",
                actual: url.chars().count(),
                max: LINK_URL_MAX_CHARS,
            });
        }
        Ok(Self {
            url: ValidatedUrl::parse(url)?,
        })
    }
}

/// The text payload of a rich text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextObject {
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

impl TextObject {
    /// Build a text payload, enforcing the API's content length limit.
    pub fn new(content: impl Into<String>, link: Option<Link>) -> Result<Self, ValidationError> {
        let content = content.into();
        let chars = content.chars().count();
        if chars > TEXT_CONTENT_MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: "text content",
                actual: chars,
                max: TEXT_CONTENT_MAX_CHARS,
            });
        }
        Ok(Self { content, link })
    }
}

/// An inline LaTeX equation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationObject {
    pub expression: String,
}

impl EquationObject {
    pub fn new(expression: impl Into<String>) -> Result<Self, ValidationError> {
        let expression = expression.into();
        let chars = expression.chars().count();
        if chars > EQUATION_EXPRESSION_MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: "equation expression",
                actual: chars,
                max: EQUATION_EXPRESSION_MAX_CHARS,
            });
        }
        Ok(Self { expression })
    }
}

/// The closed set of mention kinds the API documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionKind {
    Database,
    Date,
    LinkPreview,
    Page,
    TemplateMention,
    User,
}

impl MentionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Date => "date",
            Self::LinkPreview => "link_preview",
            Self::Page => "page",
            Self::TemplateMention => "template_mention",
            Self::User => "user",
        }
    }
}

impl FromStr for MentionKind {
    type Err = ValidationError;

    /// The explicit rejection path for mention kinds outside the closed
    /// set, e.g. the undocumented `link_mention` the API sometimes emits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "database" => Ok(Self::Database),
            "date" => Ok(Self::Date),
            "link_preview" => Ok(Self::LinkPreview),
            "page" => Ok(Self::Page),
            "template_mention" => Ok(Self::TemplateMention),
            "user" => Ok(Self::User),
            other => Err(ValidationError::UnsupportedMentionKind(other.to_string())),
        }
    }
}

impl fmt::Display for MentionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference to a page by ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub id: PageId,
}

/// Reference to a database by ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRef {
    pub id: DatabaseId,
}

/// The date sub-kind of a template mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateMentionDate {
    Today,
    Now,
}

/// The user sub-kind of a template mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateMentionUser {
    Me,
}

/// Template mention payload — a nested tagged union over date/user
/// placeholders used inside database templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TemplateMention {
    TemplateMentionDate {
        template_mention_date: TemplateMentionDate,
    },
    TemplateMentionUser {
        template_mention_user: TemplateMentionUser,
    },
}

/// An inline mention of a database, date, link preview, page, template
/// placeholder, or user. Exactly one payload, matching the tag, by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mention {
    Database { database: DatabaseRef },
    Date { date: DateValue },
    LinkPreview { link_preview: Link },
    Page { page: PageRef },
    TemplateMention { template_mention: TemplateMention },
    User { user: UserRef },
}

impl Mention {
    pub fn database(id: DatabaseId) -> Self {
        Self::Database {
            database: DatabaseRef { id },
        }
    }

    pub fn date(date: DateValue) -> Self {
        Self::Date { date }
    }

    pub fn link_preview(link: Link) -> Self {
        Self::LinkPreview { link_preview: link }
    }

    pub fn page(id: PageId) -> Self {
        Self::Page {
            page: PageRef { id },
        }
    }

    pub fn template_date(date: TemplateMentionDate) -> Self {
        Self::TemplateMention {
            template_mention: TemplateMention::TemplateMentionDate {
                template_mention_date: date,
            },
        }
    }

    pub fn template_user(user: TemplateMentionUser) -> Self {
        Self::TemplateMention {
            template_mention: TemplateMention::TemplateMentionUser {
                template_mention_user: user,
            },
        }
    }

    pub fn user(id: UserId) -> Self {
        Self::User {
            user: UserRef::new(id),
        }
    }

    /// The kind this mention carries, read back from the payload.
    pub fn kind(&self) -> MentionKind {
        match self {
            Self::Database { .. } => MentionKind::Database,
            Self::Date { .. } => MentionKind::Date,
            Self::LinkPreview { .. } => MentionKind::LinkPreview,
            Self::Page { .. } => MentionKind::Page,
            Self::TemplateMention { .. } => MentionKind::TemplateMention,
            Self::User { .. } => MentionKind::User,
        }
    }

    /// Plain-text fallback rendering for this mention.
    fn plain_text(&self) -> String {
        match self {
            Self::Database { database } => database.id.as_str().to_string(),
            Self::Date { date } => match &date.end {
                Some(end) => format!("{} → {}", date.start, end),
                None => date.start.clone(),
            },
            Self::LinkPreview { link_preview } => link_preview.url.as_str().to_string(),
            Self::Page { page } => page.id.as_str().to_string(),
            Self::TemplateMention { template_mention } => match template_mention {
                TemplateMention::TemplateMentionDate {
                    template_mention_date: TemplateMentionDate::Today,
                } => "@Today".to_string(),
                TemplateMention::TemplateMentionDate {
                    template_mention_date: TemplateMentionDate::Now,
                } => "@Now".to_string(),
                TemplateMention::TemplateMentionUser { .. } => "@Me".to_string(),
            },
            Self::User { user } => user.id.as_str().to_string(),
        }
    }
}

/// The content variant of a rich text object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextContent {
    Text { text: TextObject },
    Mention { mention: Mention },
    Equation { equation: EquationObject },
}

/// A styled text/mention/equation fragment.
///
/// Schema from the official Notion API:
/// <https://developers.notion.com/reference/rich-text>
///
/// Limits, enforced at construction:
/// - `text.content`: 2000 characters
/// - `text.link.url`: 2000 characters
/// - `equation.expression`: 1000 characters
/// - any array of rich text objects: 100 elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(flatten)]
    pub content: RichTextContent,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichText {
    /// Rich text for plain text content, with an optional inline link.
    pub fn text(content: impl Into<String>, link: Option<Link>) -> Result<Self, ValidationError> {
        let content = content.into();
        let href = link.as_ref().map(|l| l.url.as_str().to_string());
        let text = TextObject::new(content.clone(), link)?;
        Ok(Self {
            content: RichTextContent::Text { text },
            annotations: Annotations::default(),
            plain_text: content,
            href,
        })
    }

    /// Rich text for an inline mention of any of the six documented kinds.
    pub fn mention(mention: Mention) -> Self {
        let plain_text = mention.plain_text();
        let href = match &mention {
            Mention::LinkPreview { link_preview } => {
                Some(link_preview.url.as_str().to_string())
            }
            _ => None,
        };
        Self {
            content: RichTextContent::Mention { mention },
            annotations: Annotations::default(),
            plain_text,
            href,
        }
    }

    /// Rich text for an inline LaTeX equation.
    pub fn equation(expression: impl Into<String>) -> Result<Self, ValidationError> {
        let equation = EquationObject::new(expression)?;
        let plain_text = equation.expression.clone();
        Ok(Self {
            content: RichTextContent::Equation { equation },
            annotations: Annotations::default(),
            plain_text,
            href: None,
        })
    }

    /// Apply styling annotations, keeping everything else.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// The discriminant of this rich text object's content.
    pub fn type_name(&self) -> &'static str {
        match &self.content {
            RichTextContent::Text { .. } => "text",
            RichTextContent::Mention { .. } => "mention",
            RichTextContent::Equation { .. } => "equation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotations_default_is_all_false() {
        let annotations = Annotations::default();
        assert!(!annotations.bold);
        assert!(!annotations.italic);
        assert!(!annotations.strikethrough);
        assert!(!annotations.underline);
        assert!(!annotations.code);
        assert_eq!(annotations.color, Color::Default);
    }

    #[test]
    fn text_within_limit_succeeds() {
        let rt = RichText::text("Some words ", None).unwrap();
        assert_eq!(rt.type_name(), "text");
        assert_eq!(rt.plain_text, "Some words ");
        assert!(rt.href.is_none());
    }

    #[test]
    fn text_at_limit_succeeds_over_limit_fails() {
        let at_limit = "x".repeat(TEXT_CONTENT_MAX_CHARS);
        assert!(RichText::text(at_limit, None).is_ok());

        let over_limit = "x".repeat(TEXT_CONTENT_MAX_CHARS + 1);
        let err = RichText::text(over_limit, None).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooLong { field: "text content", .. }
        ));
    }

    #[test]
    fn equation_limit_enforced() {
        assert!(RichText::equation("E = mc^2").is_ok());
        assert_eq!(RichText::equation("E = mc^2").unwrap().type_name(), "equation");

        let over_limit = "x".repeat(EQUATION_EXPRESSION_MAX_CHARS + 1);
        assert!(RichText::equation(over_limit).is_err());
    }

    #[test]
    fn text_with_link_derives_href() {
        let link = Link::new("https://developers.notion.com/").unwrap();
        let rt = RichText::text("docs", Some(link)).unwrap();
        assert_eq!(rt.href.as_deref(), Some("https://developers.notion.com/"));
    }

    #[test]
    fn mention_kind_matches_payload_for_all_six_kinds() {
        let database_id = DatabaseId::parse("a1d8501e1ac143e9a6bdea9fe6c8822b").unwrap();
        let page_id = PageId::parse("a1d8501e1ac143e9a6bdea9fe6c8822b").unwrap();
        let user_id = UserId::parse("a1d8501e1ac143e9a6bdea9fe6c8822b").unwrap();

        let cases = vec![
            (Mention::database(database_id), MentionKind::Database),
            (Mention::date(DateValue::new("2022-01-01")), MentionKind::Date),
            (
                Mention::link_preview(Link::new("https://developers.notion.com/").unwrap()),
                MentionKind::LinkPreview,
            ),
            (Mention::page(page_id), MentionKind::Page),
            (
                Mention::template_date(TemplateMentionDate::Today),
                MentionKind::TemplateMention,
            ),
            (Mention::user(user_id), MentionKind::User),
        ];

        for (mention, expected_kind) in cases {
            assert_eq!(mention.kind(), expected_kind);
            let rt = RichText::mention(mention);
            assert_eq!(rt.type_name(), "mention");

            // Exactly one payload key next to the tag on the wire.
            let json = serde_json::to_value(&rt).unwrap();
            assert_eq!(json["type"], "mention");
            let mention_obj = json["mention"].as_object().unwrap();
            assert_eq!(mention_obj["type"], expected_kind.as_str());
            assert_eq!(
                mention_obj.keys().filter(|k| *k != "type").count(),
                1,
                "exactly one variant payload for {}",
                expected_kind
            );
        }
    }

    #[test]
    fn unsupported_mention_kind_rejected() {
        let err = MentionKind::from_str("link_mention").unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedMentionKind(k) if k == "link_mention"));

        for kind in ["database", "date", "link_preview", "page", "template_mention", "user"] {
            assert_eq!(MentionKind::from_str(kind).unwrap().as_str(), kind);
        }
    }

    #[test]
    fn template_mention_wire_shape() {
        let rt = RichText::mention(Mention::template_date(TemplateMentionDate::Today));
        let json = serde_json::to_value(&rt).unwrap();
        assert_eq!(json["mention"]["template_mention"]["type"], "template_mention_date");
        assert_eq!(
            json["mention"]["template_mention"]["template_mention_date"],
            "today"
        );
    }

    #[test]
    fn link_url_length_limit() {
        let long_path = "a".repeat(LINK_URL_MAX_CHARS);
        let err = Link::new(&format!("https://example.com/{}", long_path)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "link url", .. }));
    }
}
