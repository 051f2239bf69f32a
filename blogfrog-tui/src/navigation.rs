//! Navigator that routes page changes back into the UI queue

use blogfrog_core::{Navigator, Route};
use tokio::sync::mpsc;
use tracing::debug;

use crate::action::UiAction;

#[derive(Clone, Debug)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<UiAction>,
}

impl ChannelNavigator {
    pub fn new(tx: mpsc::UnboundedSender<UiAction>) -> Self {
        Self { tx }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, route: Route) {
        if self.tx.send(UiAction::Navigate(route)).is_err() {
            debug!(%route, "UI queue closed, dropping navigation");
        }
    }
}
