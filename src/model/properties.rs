// src/model/properties.rs
//! Page property values — one variant per property type declared by the
//! owning database's schema.
//!
//! The union is internally tagged on `type`, so the wire shape is
//! `{"type": "checkbox", "checkbox": false}` with the payload key equal
//! to the tag, exactly as the API emits it. Whether a property's shape
//! matches the owning database's schema is a server-side contract; what
//! is enforced here is that a value's tag and payload can never
//! disagree, plus the documented array bounds.

use crate::constants::{MULTI_SELECT_MAX_ITEMS, RICH_TEXT_ARRAY_MAX_ITEMS};
use crate::model::common::{DateValue, FileObject, SelectOption, UserRef};
use crate::model::rich_text::{PageRef, RichText};
use crate::types::{EmailAddress, ValidatedUrl, ValidationError};
use serde::{Deserialize, Serialize};

/// The result slot of a formula property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaResult {
    String { string: Option<String> },
    Number { number: Option<f64> },
    Boolean { boolean: Option<bool> },
    Date { date: Option<DateValue> },
}

/// The computed slot of a rollup property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupResult {
    Number { number: Option<f64> },
    Date { date: Option<DateValue> },
    Array { array: Vec<PropertyValue> },
}

/// A rollup value: the aggregation function plus its computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(flatten)]
    pub result: RollupResult,
}

/// A file attached to a files property, with its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub file: FileObject,
}

/// Server-assigned auto-increment identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueIdValue {
    pub number: i64,
    pub prefix: Option<String>,
}

/// A typed value attached to a page under a named slot defined by the
/// owning database's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        title: Vec<RichText>,
    },
    RichText {
        rich_text: Vec<RichText>,
    },
    Number {
        number: Option<f64>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Status {
        status: Option<SelectOption>,
    },
    Date {
        date: Option<DateValue>,
    },
    Formula {
        formula: FormulaResult,
    },
    Relation {
        relation: Vec<PageRef>,
    },
    Rollup {
        rollup: RollupValue,
    },
    People {
        people: Vec<UserRef>,
    },
    Files {
        files: Vec<PropertyFile>,
    },
    Checkbox {
        checkbox: bool,
    },
    Url {
        url: Option<String>,
    },
    Email {
        email: Option<EmailAddress>,
    },
    PhoneNumber {
        phone_number: Option<String>,
    },
    CreatedTime {
        created_time: chrono::DateTime<chrono::Utc>,
    },
    CreatedBy {
        created_by: UserRef,
    },
    LastEditedTime {
        last_edited_time: chrono::DateTime<chrono::Utc>,
    },
    LastEditedBy {
        last_edited_by: UserRef,
    },
    UniqueId {
        unique_id: UniqueIdValue,
    },
}

fn check_rich_text_bounds(items: &[RichText]) -> Result<(), ValidationError> {
    if items.len() > RICH_TEXT_ARRAY_MAX_ITEMS {
        return Err(ValidationError::BoundsViolation {
            actual: items.len(),
            min: 0,
            max: RICH_TEXT_ARRAY_MAX_ITEMS,
        });
    }
    Ok(())
}

impl PropertyValue {
    /// Title property from a bounded rich-text array.
    pub fn title(title: Vec<RichText>) -> Result<Self, ValidationError> {
        check_rich_text_bounds(&title)?;
        Ok(Self::Title { title })
    }

    /// Rich-text property from a bounded rich-text array.
    pub fn rich_text(rich_text: Vec<RichText>) -> Result<Self, ValidationError> {
        check_rich_text_bounds(&rich_text)?;
        Ok(Self::RichText { rich_text })
    }

    pub fn number(number: f64) -> Self {
        Self::Number {
            number: Some(number),
        }
    }

    /// Select property naming an option in the database schema.
    pub fn select(name: impl Into<String>) -> Self {
        Self::Select {
            select: Some(SelectOption::named(name)),
        }
    }

    /// Multi-select property from option names. Input order and
    /// duplicates are preserved; option-name validity is the server's
    /// call.
    pub fn multi_select<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let multi_select: Vec<SelectOption> =
            names.into_iter().map(SelectOption::named).collect();
        if multi_select.len() > MULTI_SELECT_MAX_ITEMS {
            return Err(ValidationError::BoundsViolation {
                actual: multi_select.len(),
                min: 0,
                max: MULTI_SELECT_MAX_ITEMS,
            });
        }
        Ok(Self::MultiSelect { multi_select })
    }

    pub fn status(name: impl Into<String>) -> Self {
        Self::Status {
            status: Some(SelectOption::named(name)),
        }
    }

    pub fn date(date: DateValue) -> Self {
        Self::Date { date: Some(date) }
    }

    pub fn relation(pages: Vec<PageRef>) -> Self {
        Self::Relation { relation: pages }
    }

    pub fn people(people: Vec<UserRef>) -> Self {
        Self::People { people }
    }

    pub fn files(files: Vec<PropertyFile>) -> Self {
        Self::Files { files }
    }

    pub fn checkbox(checkbox: bool) -> Self {
        Self::Checkbox { checkbox }
    }

    /// URL property; `None` serializes as an explicit null.
    pub fn url(url: Option<ValidatedUrl>) -> Self {
        Self::Url {
            url: url.map(|u| u.as_str().to_string()),
        }
    }

    pub fn email(email: Option<EmailAddress>) -> Self {
        Self::Email { email }
    }

    pub fn phone_number(phone_number: impl Into<String>) -> Self {
        Self::PhoneNumber {
            phone_number: Some(phone_number.into()),
        }
    }

    /// Returns the Notion API type name for this property value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::RichText { .. } => "rich_text",
            Self::Number { .. } => "number",
            Self::Select { .. } => "select",
            Self::MultiSelect { .. } => "multi_select",
            Self::Status { .. } => "status",
            Self::Date { .. } => "date",
            Self::Formula { .. } => "formula",
            Self::Relation { .. } => "relation",
            Self::Rollup { .. } => "rollup",
            Self::People { .. } => "people",
            Self::Files { .. } => "files",
            Self::Checkbox { .. } => "checkbox",
            Self::Url { .. } => "url",
            Self::Email { .. } => "email",
            Self::PhoneNumber { .. } => "phone_number",
            Self::CreatedTime { .. } => "created_time",
            Self::CreatedBy { .. } => "created_by",
            Self::LastEditedTime { .. } => "last_edited_time",
            Self::LastEditedBy { .. } => "last_edited_by",
            Self::UniqueId { .. } => "unique_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_names() {
        assert_eq!(PropertyValue::checkbox(false).type_name(), "checkbox");
        assert_eq!(PropertyValue::number(42.0).type_name(), "number");
        assert_eq!(PropertyValue::select("webpage").type_name(), "select");
    }

    #[test]
    fn title_bounds_enforced() {
        let items: Vec<RichText> = (0..=RICH_TEXT_ARRAY_MAX_ITEMS)
            .map(|i| RichText::text(format!("item {}", i), None).unwrap())
            .collect();
        let err = PropertyValue::title(items).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::BoundsViolation { actual, max, .. }
                if actual == RICH_TEXT_ARRAY_MAX_ITEMS + 1 && max == RICH_TEXT_ARRAY_MAX_ITEMS
        ));
    }

    #[test]
    fn multi_select_preserves_order_and_duplicates() {
        let value = PropertyValue::multi_select(["a", "b", "a"]).unwrap();
        let PropertyValue::MultiSelect { multi_select } = &value else {
            panic!("expected multi_select variant");
        };
        let names: Vec<&str> = multi_select.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
    }

    #[test]
    fn url_none_serializes_as_null() {
        let json = serde_json::to_value(PropertyValue::url(None)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "url", "url": null }));
    }

    #[test]
    fn checkbox_wire_shape() {
        let json = serde_json::to_value(PropertyValue::checkbox(true)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "checkbox", "checkbox": true }));
    }

    #[test]
    fn response_property_deserializes_by_tag() {
        let value: PropertyValue = serde_json::from_value(serde_json::json!({
            "type": "multi_select",
            "multi_select": [
                { "id": "abc", "name": "rust", "color": "blue" }
            ]
        }))
        .unwrap();
        assert_eq!(value.type_name(), "multi_select");

        let value: PropertyValue = serde_json::from_value(serde_json::json!({
            "type": "unique_id",
            "unique_id": { "number": 7, "prefix": "SRC" }
        }))
        .unwrap();
        assert_eq!(value.type_name(), "unique_id");
    }

    #[test]
    fn formula_and_rollup_round_trip() {
        let formula = PropertyValue::Formula {
            formula: FormulaResult::Number { number: Some(3.5) },
        };
        let json = serde_json::to_value(&formula).unwrap();
        assert_eq!(json["formula"]["type"], "number");
        assert_eq!(json["formula"]["number"], 3.5);

        let rollup: PropertyValue = serde_json::from_value(serde_json::json!({
            "type": "rollup",
            "rollup": { "type": "number", "number": 2.0, "function": "count" }
        }))
        .unwrap();
        let PropertyValue::Rollup { rollup } = &rollup else {
            panic!("expected rollup variant");
        };
        assert_eq!(rollup.function.as_deref(), Some("count"));
        assert!(matches!(rollup.result, RollupResult::Number { number: Some(n) } if n == 2.0));
    }
}
