use reel_state::ReelSnapshot;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::commands::reel_payload;

/// Event name carrying reel snapshots to the frontend
pub const REEL_STATE_EVENT: &str = "reel-state";

/// Destination for reel events, e.g. a frontend window
pub trait EventSink: Send + Sync + 'static {
    fn emit(&self, event: &str, payload: serde_json::Value);
}

/// Logs every event instead of delivering it anywhere
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: &str, payload: serde_json::Value) {
        info!("{}: {}", event, payload);
    }
}

impl EventSink for mpsc::UnboundedSender<(String, serde_json::Value)> {
    fn emit(&self, event: &str, payload: serde_json::Value) {
        let _ = self.send((event.to_string(), payload));
    }
}

/// Forwards every store revision to an event sink.
///
/// Revisions published faster than the sink drains are coalesced; the sink
/// always ends on the latest one.
pub struct ReelEmitter {
    handle: JoinHandle<()>,
}

impl ReelEmitter {
    /// Spawn the forwarding task on the current runtime
    pub fn start(mut changes: watch::Receiver<ReelSnapshot>, sink: Arc<dyn EventSink>) -> Self {
        let handle = tokio::spawn(async move {
            // Send the reel as it stands before waiting on changes
            let current = changes.borrow_and_update().clone();
            debug!("Emitting current reel revision {}", current.revision);
            sink.emit(REEL_STATE_EVENT, reel_payload(&current));

            loop {
                // Errors once the store is dropped
                if changes.changed().await.is_err() {
                    break;
                }
                let snapshot = changes.borrow_and_update().clone();
                debug!("Emitting reel revision {}", snapshot.revision);
                sink.emit(REEL_STATE_EVENT, reel_payload(&snapshot));
            }
            debug!("Reel emitter finished");
        });

        info!("Reel emitter started");
        Self { handle }
    }

    /// Abort the forwarding task; nothing is emitted afterwards
    pub fn stop(&self) {
        self.handle.abort();
        info!("Reel emitter stop requested");
    }

    /// Wait for the task to end on its own (store dropped)
    pub async fn join(self) {
        let _ = self.handle.await;
    }
}
