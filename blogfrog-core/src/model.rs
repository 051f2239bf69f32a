//! Blog entities as exchanged with the backend

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Placeholder the backend's API explorer writes into unset image fields
const PLACEHOLDER_IMAGE_URL: &str = "string";

/// A blog as shown in the overview list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPreviewEntry {
    pub id: i64,
    pub title: String,
    pub content_preview: String,
    #[serde(default)]
    pub header_image_url: Option<String>,
}

impl BlogPreviewEntry {
    /// Header image URL, or `None` when the view should show a placeholder
    pub fn header_image(&self) -> Option<&str> {
        usable_image_url(self.header_image_url.as_deref())
    }
}

/// A single blog with its full content
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetailEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub header_image_url: Option<String>,
}

impl BlogDetailEntry {
    /// Header image URL, or `None` when the view should show a placeholder
    pub fn header_image(&self) -> Option<&str> {
        usable_image_url(self.header_image_url.as_deref())
    }
}

fn usable_image_url(url: Option<&str>) -> Option<&str> {
    url.map(str::trim)
        .filter(|url| !url.is_empty() && *url != PLACEHOLDER_IMAGE_URL)
}

/// A post authored in the add-blog form, not yet sent to the backend
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPost {
    pub title: String,
    pub content: String,
}

impl DraftPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Check the shape the create endpoint requires: both fields present and non-blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::MissingField("content"));
        }
        Ok(())
    }

    /// Build a draft from loosely-typed JSON, rejecting absent or non-string fields.
    ///
    /// The result is also run through [`DraftPost::validate`].
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let draft = Self {
            title: string_field(value, "title")?,
            content: string_field(value, "content")?,
        };
        draft.validate()?;
        Ok(draft)
    }
}

fn string_field(value: &Value, field: &'static str) -> Result<String, ValidationError> {
    match value.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "string",
        }),
    }
}
