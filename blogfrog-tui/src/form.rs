//! Add-post form state and field rules

use blogfrog_core::DraftPost;
use thiserror::Error;

pub const TITLE_MIN_CHARS: usize = 2;
pub const CONTENT_MIN_CHARS: usize = 50;

/// Why a form field is not acceptable yet
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be at least 2 characters long")]
    TitleTooShort,
    #[error("Title must start with an uppercase letter")]
    TitleNotCapitalized,
    #[error("Title cannot be 'Test'")]
    TitleReserved,
    #[error("Content is required")]
    ContentRequired,
    #[error("Content must be at least 50 characters long")]
    ContentTooShort,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Content,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Title,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub content: String,
    pub focus: FormField,
    /// Set by the first publish attempt; field errors are shown from then on
    pub attempted: bool,
}

impl FormState {
    pub fn title_error(&self) -> Option<FieldError> {
        validate_title(&self.title).err()
    }

    pub fn content_error(&self) -> Option<FieldError> {
        validate_content(&self.content).err()
    }

    pub fn is_valid(&self) -> bool {
        self.title_error().is_none() && self.content_error().is_none()
    }

    /// Field errors to display, empty until the user tried to publish
    pub fn visible_errors(&self) -> Vec<FieldError> {
        if !self.attempted {
            return Vec::new();
        }
        self.title_error()
            .into_iter()
            .chain(self.content_error())
            .collect()
    }

    pub fn draft(&self) -> DraftPost {
        DraftPost::new(self.title.clone(), self.content.clone())
    }
}

/// Checks run in order; the first failing rule is reported.
pub fn validate_title(title: &str) -> Result<(), FieldError> {
    if title.is_empty() {
        return Err(FieldError::TitleRequired);
    }
    if title.chars().count() < TITLE_MIN_CHARS {
        return Err(FieldError::TitleTooShort);
    }
    if !title.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        return Err(FieldError::TitleNotCapitalized);
    }
    if title.eq_ignore_ascii_case("test") {
        return Err(FieldError::TitleReserved);
    }
    Ok(())
}

pub fn validate_content(content: &str) -> Result<(), FieldError> {
    if content.is_empty() {
        return Err(FieldError::ContentRequired);
    }
    if content.chars().count() < CONTENT_MIN_CHARS {
        return Err(FieldError::ContentTooShort);
    }
    Ok(())
}
