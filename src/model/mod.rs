pub mod common;
pub mod page;
pub mod properties;
pub mod rich_text;

pub use common::{DateValue, ExternalFile, FileObject, HostedFile, Icon, SelectOption, UserRef};
pub use page::{
    CreatePageRequest, PageProperty, PageRequestBuilder, PageResponse, Parent, SourceKind,
};
pub use properties::{
    FormulaResult, PropertyFile, PropertyValue, RollupResult, RollupValue, UniqueIdValue,
};
pub use rich_text::{
    Annotations, DatabaseRef, EquationObject, Link, Mention, MentionKind, PageRef, RichText,
    RichTextContent, TemplateMention, TemplateMentionDate, TemplateMentionUser, TextObject,
};
