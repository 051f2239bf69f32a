//! UI-only state: current page, list cursor, form contents
//!
//! Blog data is not duplicated here; views read it from the store's
//! [`BlogState`](blogfrog_core::BlogState).

use blogfrog_core::Route;

use crate::form::FormState;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];
pub const TICK_MS: u64 = 120;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub route: Route,
    /// Highlighted row in the overview list
    pub cursor: usize,
    pub form: FormState,
    pub tick: u64,
    pub quit: bool,
}

impl UiState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            ..Default::default()
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNERS[(self.tick as usize) % SPINNERS.len()]
    }

    /// Cursor clamped to a list of `len` rows
    pub fn cursor_in(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.cursor.min(len - 1))
        }
    }
}
