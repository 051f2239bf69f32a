//! UI actions
//!
//! Everything the terminal front-end can ask for. Blog data intents are not
//! listed here: the UI reducer turns these into [`BlogAction`]s for the store.
//!
//! [`BlogAction`]: blogfrog_core::BlogAction

use blogfrog_core::{Action, Route};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    /// Switch page; entering a page issues its load intent
    Navigate(Route),
    /// Esc: back to the overview
    Back,
    /// Re-run the current page's load intent
    Reload,

    // ===== Overview list =====
    ListNext,
    ListPrev,
    ListOpenSelected,

    // ===== Add-post form =====
    FormTitleChange(String),
    FormContentChange(String),
    FormFocusNext,
    FormSubmit,
    FormReset,

    /// Spinner animation
    Tick,
    Quit,
}

impl Action for UiAction {
    fn name(&self) -> &'static str {
        match self {
            UiAction::Navigate(_) => "Navigate",
            UiAction::Back => "Back",
            UiAction::Reload => "Reload",
            UiAction::ListNext => "ListNext",
            UiAction::ListPrev => "ListPrev",
            UiAction::ListOpenSelected => "ListOpenSelected",
            UiAction::FormTitleChange(_) => "FormTitleChange",
            UiAction::FormContentChange(_) => "FormContentChange",
            UiAction::FormFocusNext => "FormFocusNext",
            UiAction::FormSubmit => "FormSubmit",
            UiAction::FormReset => "FormReset",
            UiAction::Tick => "Tick",
            UiAction::Quit => "Quit",
        }
    }

    fn category(&self) -> Option<&'static str> {
        match self {
            UiAction::Navigate(_) | UiAction::Back | UiAction::Reload => Some("nav"),
            UiAction::ListNext | UiAction::ListPrev | UiAction::ListOpenSelected => Some("list"),
            UiAction::FormTitleChange(_)
            | UiAction::FormContentChange(_)
            | UiAction::FormFocusNext
            | UiAction::FormSubmit
            | UiAction::FormReset => Some("form"),
            UiAction::Tick | UiAction::Quit => Some("app"),
        }
    }

    fn summary(&self) -> String {
        match self {
            // Draft text stays out of the log
            UiAction::FormTitleChange(v) | UiAction::FormContentChange(v) => {
                format!("{}({} chars)", self.name(), v.chars().count())
            }
            _ => format!("{:?}", self),
        }
    }
}
