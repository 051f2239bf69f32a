//! Terminal front-end for BlogFrog
//!
//! Pages are [`components`] that render from [`UiState`](state::UiState) plus the
//! store's [`BlogState`](blogfrog_core::BlogState) and emit [`UiAction`](action::UiAction)s.
//! The UI reducer owns page state and hands blog intents to the
//! [`BlogStore`](blogfrog_core::BlogStore); [`app::run`] drives both.

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod events;
pub mod form;
pub mod logging;
pub mod navigation;
pub mod reducer;
pub mod state;
pub mod testing;

pub use action::UiAction;
pub use app::App;
pub use navigation::ChannelNavigator;
pub use state::UiState;
