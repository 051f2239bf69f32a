//! Terminal input polling
//!
//! crossterm's reader is blocking, so a task polls it in short batches and
//! forwards events over a channel the app loop can `select!` on.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub const POLL_TIMEOUT: Duration = Duration::from_millis(10);
pub const LOOP_SLEEP: Duration = Duration::from_millis(16);

/// Terminal events the app reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    Key(KeyEvent),
    Resize(u16, u16),
}

impl EventKind {
    /// Convert a crossterm event; key releases and unhandled kinds yield `None`.
    pub fn from_crossterm(event: event::Event) -> Option<Self> {
        match event {
            event::Event::Key(key) if key.kind != KeyEventKind::Release => {
                Some(EventKind::Key(key))
            }
            event::Event::Resize(w, h) => Some(EventKind::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawn the polling task; it stops when `cancel_token` fires or the receiver is gone.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        let Ok(evt) = event::read() else {
                            continue;
                        };
                        if let Some(kind) = EventKind::from_crossterm(evt) {
                            if tx.send(kind).is_err() {
                                debug!("Event channel closed, stopping poller");
                                return;
                            }
                        }
                    }
                }
            }
        }
    })
}
